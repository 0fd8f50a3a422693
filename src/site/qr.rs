//! Request URL construction for the external QR image service.

use url::Url;

/// The QR image generation endpoint.
pub const QR_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Requested image size in pixels.
pub const QR_IMAGE_SIZE: &str = "256x256";

/// Builds the image request URL for a QR payload.
///
/// The payload goes percent-encoded into the `data` query parameter; the
/// response is an image to display, never parsed further.
#[must_use]
pub fn qr_image_url(payload: &str) -> String {
    // The endpoint is a constant, so parsing cannot fail.
    let mut url = Url::parse(QR_ENDPOINT).expect("QR endpoint is a valid URL");
    url.query_pairs_mut()
        .append_pair("size", QR_IMAGE_SIZE)
        .append_pair("data", payload);
    url.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_is_percent_encoded() {
        let url = qr_image_url("mailto:x@y.com");
        assert!(url.starts_with(QR_ENDPOINT));
        assert!(url.contains("size=256x256"));
        assert!(url.contains("data=mailto%3Ax%40y.com"));
    }

    #[test]
    fn test_round_trips_through_url_parser() {
        let url = Url::parse(&qr_image_url("hello world & more")).unwrap();
        let data = url
            .query_pairs()
            .find(|(k, _)| k == "data")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        assert_eq!(data, "hello world & more");
    }

    #[test]
    fn test_empty_payload_still_builds() {
        let url = qr_image_url("");
        assert!(url.contains("data="));
    }
}

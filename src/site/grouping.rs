//! Groups the flat link list into ordered category sections.
//!
//! Categories from [`PRIORITY_CATEGORIES`] render first, in that order;
//! anything else follows in the order it was first seen in the document.

use crate::site::Link;

/// Category assigned to links with an empty or absent category field.
pub const DEFAULT_CATEGORY: &str = "OTHER";

/// Fixed category ordering for the top of the page.
pub const PRIORITY_CATEGORIES: [&str; 5] =
    ["EXPERIENCE", "DOWNLOADS", "NETWORK", "INQUIRIES", DEFAULT_CATEGORY];

/// One named bucket of links, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkGroup {
    /// Category name
    pub name: String,
    /// Links assigned to this category, preserving document order
    pub links: Vec<Link>,
}

/// Partitions `links` into category groups with deterministic ordering.
///
/// Every link lands in exactly one group. Group order is the priority list
/// (skipping empty categories), then remaining categories in first-seen
/// order. Within a group, links keep their relative document order.
#[must_use]
pub fn group_links(links: &[Link]) -> Vec<LinkGroup> {
    // First-seen category order; buckets are looked up by scanning this
    // small list rather than a map so iteration order never depends on
    // hashing.
    let mut buckets: Vec<LinkGroup> = Vec::new();

    for link in links {
        let category = link.category_or_default();
        match buckets.iter_mut().find(|g| g.name == category) {
            Some(group) => group.links.push(link.clone()),
            None => buckets.push(LinkGroup {
                name: category.to_string(),
                links: vec![link.clone()],
            }),
        }
    }

    let mut ordered = Vec::with_capacity(buckets.len());
    for priority in PRIORITY_CATEGORIES {
        if let Some(pos) = buckets.iter().position(|g| g.name == priority) {
            ordered.push(buckets.remove(pos));
        }
    }
    // Whatever is left keeps first-seen order.
    ordered.append(&mut buckets);

    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::{IconName, LinkStyle};

    fn link(label: &str, category: Option<&str>) -> Link {
        Link {
            label: label.to_string(),
            url: format!("https://example.com/{label}"),
            icon: IconName::Globe,
            style: LinkStyle::Solid,
            enabled: true,
            category: category.map(String::from),
            action: None,
            qr_content: None,
        }
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(group_links(&[]).is_empty());
    }

    #[test]
    fn test_priority_then_first_seen_order() {
        let links = vec![
            link("a", Some("NETWORK")),
            link("b", Some("EXPERIENCE")),
            link("c", None),
            link("d", Some("CUSTOM")),
        ];

        let groups = group_links(&links);
        let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["EXPERIENCE", "NETWORK", "OTHER", "CUSTOM"]);
    }

    #[test]
    fn test_multiple_unknown_categories_keep_first_seen_order() {
        let links = vec![
            link("a", Some("ZULU")),
            link("b", Some("ALPHA")),
            link("c", Some("ZULU")),
            link("d", Some("DOWNLOADS")),
        ];

        let groups = group_links(&links);
        let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
        // DOWNLOADS is on the priority list; ZULU came before ALPHA.
        assert_eq!(names, ["DOWNLOADS", "ZULU", "ALPHA"]);
        assert_eq!(groups[1].links.len(), 2);
    }

    #[test]
    fn test_empty_category_falls_back_to_other() {
        let links = vec![link("a", Some("")), link("b", None)];
        let groups = group_links(&links);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, DEFAULT_CATEGORY);
        assert_eq!(groups[0].links.len(), 2);
    }

    #[test]
    fn test_flattening_is_a_stable_permutation() {
        let links = vec![
            link("a", Some("NETWORK")),
            link("b", Some("EXPERIENCE")),
            link("c", Some("NETWORK")),
            link("d", None),
            link("e", Some("EXPERIENCE")),
            link("f", Some("CUSTOM")),
        ];

        let groups = group_links(&links);

        // Every link appears exactly once across all groups.
        let flattened: Vec<&Link> = groups.iter().flat_map(|g| &g.links).collect();
        assert_eq!(flattened.len(), links.len());
        for original in &links {
            assert_eq!(
                flattened.iter().filter(|l| l.label == original.label).count(),
                1
            );
        }

        // Relative order within each category matches document order.
        for group in &groups {
            let expected: Vec<&str> = links
                .iter()
                .filter(|l| l.category_or_default() == group.name)
                .map(|l| l.label.as_str())
                .collect();
            let actual: Vec<&str> = group.links.iter().map(|l| l.label.as_str()).collect();
            assert_eq!(actual, expected, "order differs in group {}", group.name);
        }
    }

    #[test]
    fn test_determinism_across_runs() {
        let links = vec![
            link("a", Some("B")),
            link("b", Some("A")),
            link("c", Some("C")),
        ];
        assert_eq!(group_links(&links), group_links(&links));
    }
}

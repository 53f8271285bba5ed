use crate::error::Result;
use crate::model::{BadgeClass, EarnedBadge};

/// Whether `badge_class` appears in the learner's earned list.
///
/// An earned badge points at its badge class by containing the class's
/// `edx_href` inside its `badge` reference, so membership is a substring
/// test rather than key equality. An `edx_href` that is a prefix of
/// another will therefore also match assertions of the longer one.
pub fn is_earned(badge_class: &BadgeClass, earned: &[EarnedBadge]) -> bool {
    earned.iter().any(|b| b.badge.contains(&badge_class.edx_href))
}

/// The joined view of a course's badge classes and the learner's earned
/// badges.
#[derive(Debug, Clone)]
pub struct BadgeCollection {
    badge_classes: Vec<BadgeClass>,
    earned: Vec<EarnedBadge>,
}

impl BadgeCollection {
    /// Join the two lists, annotating every badge class with
    /// [`is_earned`].
    pub fn new(mut badge_classes: Vec<BadgeClass>, earned: Vec<EarnedBadge>) -> Self {
        for badge_class in &mut badge_classes {
            badge_class.is_earned = is_earned(badge_class, &earned);
        }
        Self {
            badge_classes,
            earned,
        }
    }

    /// All badge classes for the course, annotated.
    pub fn badge_classes(&self) -> &[BadgeClass] {
        &self.badge_classes
    }

    pub fn is_empty(&self) -> bool {
        self.badge_classes.is_empty()
    }

    /// Badge classes the learner has earned.
    pub fn earned_badges(&self) -> impl Iterator<Item = &BadgeClass> {
        self.badge_classes.iter().filter(|c| c.is_earned)
    }

    /// Badge classes the learner can still earn.
    pub fn unlockable_badges(&self) -> impl Iterator<Item = &BadgeClass> {
        self.badge_classes.iter().filter(|c| !c.is_earned)
    }

    /// JSON array of the learner's earned badge references, for use
    /// outside the badge panel.
    pub fn badge_urls(&self) -> Result<String> {
        let urls: Vec<&str> = self.earned.iter().map(|b| b.badge.as_str()).collect();
        Ok(serde_json::to_string(&urls)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn badge_class(edx_href: &str) -> BadgeClass {
        BadgeClass {
            edx_href: edx_href.to_string(),
            name: "Math Star".to_string(),
            image: "https://svc/media/math101.png".to_string(),
            description: "Mastered the first math unit".to_string(),
            is_earned: false,
        }
    }

    fn earned_badge(badge: &str) -> EarnedBadge {
        EarnedBadge {
            badge: badge.to_string(),
        }
    }

    #[test]
    fn test_is_earned_empty_list() {
        assert!(!is_earned(&badge_class("/badge/math101"), &[]));
    }

    #[test]
    fn test_is_earned_matches_containing_reference() {
        let earned = vec![earned_badge("https://svc/badge/math101/assert/9")];
        assert!(is_earned(&badge_class("/badge/math101"), &earned));
    }

    #[test]
    fn test_is_earned_ignores_other_references() {
        let earned = vec![earned_badge("https://svc/badge/history204/assert/3")];
        assert!(!is_earned(&badge_class("/badge/math101"), &earned));
    }

    #[test]
    fn test_is_earned_is_pure() {
        let earned = vec![earned_badge("https://svc/badge/math101/assert/9")];
        let class = badge_class("/badge/math101");
        assert_eq!(is_earned(&class, &earned), is_earned(&class, &earned));
    }

    #[test]
    fn test_prefix_reference_matches_longer_assertion() {
        // Substring containment, not key equality: a reference that is
        // a prefix of another also matches the longer one's assertions.
        let earned = vec![earned_badge("https://svc/badge/math101/assert/9")];
        assert!(is_earned(&badge_class("/badge/math10"), &earned));
    }

    #[test]
    fn test_empty_reference_matches_any_assertion() {
        let earned = vec![earned_badge("https://svc/badge/math101/assert/9")];
        assert!(is_earned(&badge_class(""), &earned));
    }

    #[test]
    fn test_collection_annotates_each_class() {
        let classes = vec![
            badge_class("/badge/math101"),
            badge_class("/badge/history204"),
        ];
        let earned = vec![earned_badge("https://svc/badge/math101/assert/9")];

        let collection = BadgeCollection::new(classes, earned);

        let flags: Vec<bool> = collection
            .badge_classes()
            .iter()
            .map(|c| c.is_earned)
            .collect();
        assert_eq!(flags, vec![true, false]);
    }

    #[test]
    fn test_collection_partitions_earned_and_unlockable() {
        let classes = vec![
            badge_class("/badge/math101"),
            badge_class("/badge/history204"),
        ];
        let earned = vec![earned_badge("https://svc/badge/math101/assert/9")];

        let collection = BadgeCollection::new(classes, earned);

        assert_eq!(collection.earned_badges().count(), 1);
        assert_eq!(collection.unlockable_badges().count(), 1);
        assert!(collection.earned_badges().all(|c| c.is_earned));
        assert!(collection.unlockable_badges().all(|c| !c.is_earned));
    }

    #[test]
    fn test_badge_urls_empty() {
        let collection = BadgeCollection::new(vec![], vec![]);
        assert_eq!(collection.badge_urls().unwrap(), "[]");
    }

    #[test]
    fn test_badge_urls_lists_earned_references() {
        let collection = BadgeCollection::new(
            vec![badge_class("/badge/math101")],
            vec![earned_badge("https://svc/badge/math101/assert/9")],
        );
        assert_eq!(
            collection.badge_urls().unwrap(),
            r#"["https://svc/badge/math101/assert/9"]"#
        );
    }
}

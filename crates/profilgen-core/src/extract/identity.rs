use crate::nlp::{EntityLabel, RawEntity};
use crate::profile::Identity;

/// Resolves identity fields from recognizer output in a single in-order
/// pass. Each field is sticky: the first qualifying entity wins and later
/// candidates of the same kind are ignored.
#[must_use]
pub fn resolve(entities: &[RawEntity]) -> Identity {
    let mut identity = Identity::default();

    for entity in entities {
        match entity.label {
            EntityLabel::Person if identity.name.is_empty() => {
                identity.name = entity.text.clone();
            }
            EntityLabel::Misc if identity.email.is_empty() && entity.text.contains('@') => {
                identity.email = entity.text.clone();
            }
            EntityLabel::Misc if identity.phone.is_empty() && is_phone_shaped(&entity.text) => {
                identity.phone = entity.text.clone();
            }
            _ => {}
        }
    }

    identity
}

/// Shape heuristic: after stripping common separators the remainder must be
/// 7-15 characters and at least 70% digits.
fn is_phone_shaped(text: &str) -> bool {
    let cleaned: Vec<char> = text
        .chars()
        .filter(|c| !matches!(c, '-' | '(' | ')') && !c.is_whitespace())
        .collect();

    let digits = cleaned.iter().filter(|c| c.is_ascii_digit()).count();

    (7..=15).contains(&cleaned.len()) && digits as f64 >= cleaned.len() as f64 * 0.7
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_all_three_fields() {
        let entities = vec![
            RawEntity::new("Max Mustermann", EntityLabel::Person),
            RawEntity::new("max@firma.de", EntityLabel::Misc),
            RawEntity::new("+49 176 1234567", EntityLabel::Misc),
        ];

        let identity = resolve(&entities);

        assert_eq!(identity.name, "Max Mustermann");
        assert_eq!(identity.email, "max@firma.de");
        assert_eq!(identity.phone, "+49 176 1234567");
        assert!(identity.is_complete());
    }

    #[test]
    fn test_first_person_wins() {
        let entities = vec![
            RawEntity::new("Max Mustermann", EntityLabel::Person),
            RawEntity::new("Erika Musterfrau", EntityLabel::Person),
        ];

        assert_eq!(resolve(&entities).name, "Max Mustermann");
    }

    #[test]
    fn test_misc_without_shape_is_ignored() {
        let entities = vec![
            RawEntity::new("irgendwas", EntityLabel::Misc),
            RawEntity::new("Berlin", EntityLabel::Location),
        ];

        let identity = resolve(&entities);

        assert!(identity.email.is_empty());
        assert!(identity.phone.is_empty());
    }

    #[test]
    fn test_empty_entities_yield_empty_identity() {
        assert_eq!(resolve(&[]), Identity::default());
    }

    #[test]
    fn test_phone_shape() {
        assert!(is_phone_shaped("+49 176 1234567"));
        assert!(is_phone_shaped("0301234567"));
        assert!(is_phone_shaped("(030) 123-4567"));
        // Too short once separators are stripped.
        assert!(!is_phone_shaped("12345"));
        // Mostly letters.
        assert!(!is_phone_shaped("Mustermann1"));
        // Too long.
        assert!(!is_phone_shaped("1234567890123456"));
    }
}

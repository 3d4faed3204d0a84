use crate::Country;

/// True iff `interpretation` fully matches one of `country`'s accepted phone
/// forms. A non-match is simply `false`.
pub fn validate(country: Country, interpretation: &str) -> bool {
    country.phone_format().is_match(interpretation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_form_is_ten_digits_everywhere() {
        for country in Country::ALL {
            assert!(validate(country, "2106930664"), "{country}");
            assert!(!validate(country, "210693664"), "{country}");
            assert!(!validate(country, "21069306641"), "{country}");
        }
    }

    #[test]
    fn international_prefixes() {
        assert!(validate(Country::Usa, "0012025550143"));
        assert!(!validate(Country::Usa, "00302106930664"));

        assert!(validate(Country::Greece, "00302106930664"));
        assert!(!validate(Country::Greece, "0012106930664"));

        assert!(validate(Country::Russia, "0074951234567"));
        assert!(validate(Country::Russia, "84951234567"));
        assert!(!validate(Country::Greece, "84951234567"));
    }

    #[test]
    fn partial_matches_do_not_count() {
        assert!(!validate(Country::Greece, "x2106930664"));
        assert!(!validate(Country::Greece, "2106930664 "));
        assert!(!validate(Country::Usa, ""));
    }
}

//! Submit eligibility for the lead-capture form.

/// A request becomes submittable once the address is long enough to plausibly
/// be a public address, there is some way to reach the person back and the
/// ownership box is ticked. Surrounding whitespace never counts.
pub fn can_submit(address: &str, contact: &str, agree: bool) -> bool {
    let address_ok = address.trim().chars().count() >= 8;
    let contact_ok = contact.trim().chars().count() > 2;
    address_ok && contact_ok && agree
}

#[cfg(test)]
mod tests {
    use super::can_submit;

    #[test]
    fn empty_fields_are_rejected() {
        assert!(!can_submit("", "", false));
    }

    #[test]
    fn short_address_is_rejected() {
        assert!(!can_submit("0x123", "@u", true));
    }

    #[test]
    fn missing_contact_is_rejected() {
        assert!(!can_submit("0x12345678", "", true));
    }

    #[test]
    fn unconfirmed_ownership_is_rejected() {
        assert!(!can_submit("0x12345678", "@user", false));
        assert!(!can_submit("0xabcdef123456", "+1-202-555", false));
    }

    #[test]
    fn valid_request_is_accepted() {
        assert!(can_submit("0x1234567890", "@user", true));
    }

    #[test]
    fn surrounding_whitespace_is_ignored_on_the_address() {
        assert!(can_submit("   0x12345678   ", "tg:@user", true));
    }

    #[test]
    fn whitespace_only_contact_is_rejected() {
        assert!(!can_submit("0xabcdef123456", "   ", true));
    }

    #[test]
    fn contact_needs_more_than_two_characters() {
        assert!(!can_submit("0x12345678", "@u ", true));
        assert!(can_submit("0x12345678", "@us", true));
    }
}

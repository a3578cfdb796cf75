pub mod types;
pub mod utils;
pub mod pagination;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn welcome_message_names_the_api() {
        let w = types::Message::new(types::WELCOME);
        assert!(w.message.contains("Clinic Booking"));
    }
}

use rand::{Rng, distributions::Alphanumeric};

/// Generates a random alphanumeric string of the specified length.
///
/// The output contains uppercase letters (A-Z), lowercase letters (a-z) and
/// digits (0-9), drawn from `thread_rng`, so it is suitable for session
/// tokens and other identifiers that must be unguessable.
///
/// # Arguments
///
/// * `length` - The desired length of the generated string
pub fn generate_random_string(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_requested_length() {
        assert_eq!(generate_random_string(32).len(), 32);
        assert_eq!(generate_random_string(8).len(), 8);
        assert!(generate_random_string(0).is_empty());
    }

    #[test]
    fn test_output_is_alphanumeric() {
        let token = generate_random_string(64);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_successive_calls_differ() {
        assert_ne!(generate_random_string(32), generate_random_string(32));
    }
}

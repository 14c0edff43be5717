//! Check-digit validation for Brazilian individual taxpayer numbers (CPF).
//!
//! A CPF carries nine payload digits followed by two check digits. Check digit
//! `i` (positions 9 and 10) weights the preceding digits from `i + 1` down to 2
//! and reduces the weighted sum with `((sum * 10) mod 11) mod 10`.

pub const CPF_DIGIT_COUNT: usize = 11;

const CHECK_POSITIONS: [usize; 2] = [9, 10];

/// Stateless CPF checksum validator.
#[derive(Debug, Clone, Copy, Default)]
pub struct CpfChecksum;

impl CpfChecksum {
    /// Returns `true` when `candidate`, after dropping every non-digit
    /// character, is eleven digits with both check digits correct.
    ///
    /// No padding is applied here; callers that receive numbers with dropped
    /// leading zeros must pad before validating.
    pub fn is_valid(&self, candidate: &str) -> bool {
        let digits: Vec<u32> = candidate.chars().filter_map(|c| c.to_digit(10)).collect();

        if digits.len() != CPF_DIGIT_COUNT {
            return false;
        }

        // Repeated digits satisfy the arithmetic but are never issued.
        if digits.iter().all(|digit| *digit == digits[0]) {
            return false;
        }

        CHECK_POSITIONS
            .iter()
            .all(|&position| expected_check_digit(&digits[..position]) == digits[position])
    }
}

/// Check digit that must follow `leading`, the digits before the check position.
pub fn expected_check_digit(leading: &[u32]) -> u32 {
    let top_weight = leading.len() as u32 + 1;
    let sum: u32 = leading
        .iter()
        .enumerate()
        .map(|(index, digit)| digit * (top_weight - index as u32))
        .sum();

    ((sum * 10) % 11) % 10
}

/// Convenience wrapper around [`CpfChecksum::is_valid`].
pub fn is_valid_cpf(candidate: &str) -> bool {
    CpfChecksum.is_valid(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn with_check_digits(payload: &[u32]) -> Vec<u32> {
        let mut digits = payload.to_vec();
        let first = expected_check_digit(&digits);
        digits.push(first);
        let second = expected_check_digit(&digits);
        digits.push(second);
        digits
    }

    fn render(digits: &[u32]) -> String {
        digits
            .iter()
            .map(|digit| char::from_digit(*digit, 10).expect("single digit"))
            .collect()
    }

    #[test]
    fn accepts_known_valid_numbers() {
        let valid_ids = vec![
            "52998224725",
            "529.982.247-25",
            "012.345.678-90",
            "083.358.948-25",
            "12345678909",
        ];
        for id in valid_ids {
            assert!(is_valid_cpf(id), "{id} should be valid");
        }
    }

    #[test]
    fn rejects_wrong_check_digits() {
        let invalid_ids = vec![
            "52998224726",
            "52998224715",
            "345.675.677-78",
            "123.567.234-67",
            "12345678900",
        ];
        for id in invalid_ids {
            assert!(!is_valid_cpf(id), "{id} should be invalid");
        }
    }

    #[test]
    fn rejects_wrong_lengths_without_padding() {
        assert!(!is_valid_cpf(""));
        assert!(!is_valid_cpf("1234567890"));
        assert!(!is_valid_cpf("529982247250"));
        assert!(!is_valid_cpf("345.678.3428723-76"));
        assert!(!is_valid_cpf("abcdefghijk"));
    }

    #[test]
    fn rejects_every_repeated_digit_number() {
        for digit in 0..=9 {
            let id = char::from_digit(digit, 10)
                .expect("digit")
                .to_string()
                .repeat(CPF_DIGIT_COUNT);
            assert!(!is_valid_cpf(&id), "{id} should be invalid");
        }
    }

    #[test]
    fn ignores_non_digit_separators() {
        assert!(is_valid_cpf(" 529 982 247 / 25 "));
    }

    fn payload_strategy() -> impl Strategy<Value = Vec<u32>> {
        prop::collection::vec(0u32..10, 9)
            .prop_filter("not a repeated digit", |digits| {
                digits.iter().any(|digit| *digit != digits[0])
            })
    }

    proptest! {
        #[test]
        fn generated_numbers_validate(payload in payload_strategy()) {
            let digits = with_check_digits(&payload);
            prop_assert!(is_valid_cpf(&render(&digits)));
        }

        #[test]
        fn altering_a_check_digit_invalidates(
            payload in payload_strategy(),
            position in 9usize..11,
            shift in 1u32..10,
        ) {
            let mut digits = with_check_digits(&payload);
            digits[position] = (digits[position] + shift) % 10;
            prop_assert!(!is_valid_cpf(&render(&digits)));
        }

        #[test]
        fn altering_a_payload_digit_invalidates_unless_check_digits_collide(
            payload in payload_strategy(),
            position in 0usize..9,
            shift in 1u32..10,
        ) {
            let original = with_check_digits(&payload);
            let mut mutated_payload = payload.clone();
            mutated_payload[position] = (mutated_payload[position] + shift) % 10;
            let recomputed = with_check_digits(&mutated_payload);

            let mut mutated = original.clone();
            mutated[position] = mutated_payload[position];

            let collides = recomputed[9..] == original[9..];
            let repeated = mutated.iter().all(|digit| *digit == mutated[0]);
            prop_assert_eq!(is_valid_cpf(&render(&mutated)), collides && !repeated);
        }
    }
}

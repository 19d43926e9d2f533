use rand::Rng;

/// Fixed prefix on every booking reference.
pub const REFERENCE_PREFIX: &str = "AST";

const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generates an opaque booking reference of the form `AST-XXXXX-XX`,
/// where X is an uppercase alphanumeric character.
///
/// Uniqueness is best-effort within a process lifetime; there is no
/// collision check against past bookings.
pub fn generate_reference(rng: &mut impl Rng) -> String {
    let mut block = |len: usize| -> String {
        (0..len)
            .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
            .collect()
    };

    let middle = block(5);
    let suffix = block(2);
    format!("{REFERENCE_PREFIX}-{middle}-{suffix}")
}

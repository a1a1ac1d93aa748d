use std::collections::{HashMap, HashSet};

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;

/// C++ keywords, alternative tokens and TS keywords. None of these may be
/// used as a field name.
pub const RESERVED_WORDS: &[&str] = &[
    "alignas",
    "alignof",
    "and",
    "and_eq",
    "asm",
    "atomic_cancel",
    "atomic_commit",
    "atomic_noexcept",
    "auto",
    "bitand",
    "bitor",
    "bool",
    "break",
    "case",
    "catch",
    "char",
    "char8_t",
    "char16_t",
    "char32_t",
    "class",
    "compl",
    "concept",
    "const",
    "consteval",
    "constexpr",
    "constinit",
    "const_cast",
    "continue",
    "co_await",
    "co_return",
    "co_yield",
    "decltype",
    "default",
    "delete",
    "do",
    "double",
    "dynamic_cast",
    "else",
    "enum",
    "explicit",
    "export",
    "extern",
    "false",
    "float",
    "for",
    "friend",
    "goto",
    "if",
    "inline",
    "int",
    "long",
    "mutable",
    "namespace",
    "new",
    "noexcept",
    "not",
    "not_eq",
    "nullptr",
    "operator",
    "or",
    "or_eq",
    "private",
    "protected",
    "public",
    "reflexpr",
    "register",
    "reinterpret_cast",
    "requires",
    "return",
    "short",
    "signed",
    "sizeof",
    "static",
    "static_assert",
    "static_cast",
    "struct",
    "switch",
    "synchronized",
    "template",
    "this",
    "thread_local",
    "throw",
    "true",
    "try",
    "typedef",
    "typeid",
    "typename",
    "union",
    "unsigned",
    "using",
    "virtual",
    "void",
    "volatile",
    "wchar_t",
    "while",
    "xor",
    "xor_eq",
];

const HEAD_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ_";
const TAIL_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ_0123456789";

pub const MAX_NAME_LEN: usize = 100;

/// Hands out random field names that are unique for the whole run.
///
/// A name is drawn lazily the first time a `(struct_id, field_id)` key is
/// asked for and then cached, so every pass that renders the same field
/// sees the same name.
pub struct NameGen {
    rng: StdRng,
    reserved: HashSet<&'static str>,
    used: HashSet<String>,
    by_key: HashMap<(usize, usize), String>,
}

impl NameGen {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            reserved: RESERVED_WORDS.iter().copied().collect(),
            used: RESERVED_WORDS.iter().map(|w| w.to_string()).collect(),
            by_key: HashMap::new(),
        }
    }

    pub fn get_field_name(&mut self, struct_id: usize, field_id: usize) -> &str {
        let key = (struct_id, field_id);
        if !self.by_key.contains_key(&key) {
            let name = self.fresh_name();
            self.used.insert(name.clone());
            self.by_key.insert(key, name);
        }
        &self.by_key[&key]
    }

    /// Names allocated so far, not counting the reserved words.
    pub fn allocated_count(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved.contains(name)
    }

    fn fresh_name(&mut self) -> String {
        let mut retries = 0usize;
        loop {
            let candidate = self.random_identifier();
            debug_assert!(is_valid_identifier(&candidate));
            if !self.reserved.contains(candidate.as_str()) && !self.used.contains(&candidate) {
                if retries > 0 {
                    debug!(retries, "rejected colliding field names");
                }
                return candidate;
            }
            retries += 1;
        }
    }

    fn random_identifier(&mut self) -> String {
        let len = self.rng.gen_range(1..=MAX_NAME_LEN);
        let mut name = String::with_capacity(len);
        name.push(HEAD_CHARS[self.rng.gen_range(0..HEAD_CHARS.len())] as char);
        for _ in 1..len {
            name.push(TAIL_CHARS[self.rng.gen_range(0..TAIL_CHARS.len())] as char);
        }
        name
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`, at most `MAX_NAME_LEN` long.
pub fn is_valid_identifier(name: &str) -> bool {
    let bytes = name.as_bytes();
    match bytes.split_first() {
        Some((head, tail)) => {
            bytes.len() <= MAX_NAME_LEN
                && HEAD_CHARS.contains(head)
                && tail.iter().all(|b| TAIL_CHARS.contains(b))
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn same_key_returns_same_name() {
        let mut gen = NameGen::with_seed(7);
        let first = gen.get_field_name(3, 1).to_owned();
        gen.get_field_name(3, 0);
        gen.get_field_name(4, 1);
        assert_eq!(gen.get_field_name(3, 1), first);
        assert_eq!(gen.allocated_count(), 3);
    }

    #[test]
    fn full_run_names_are_unique_and_not_reserved() {
        let mut gen = NameGen::with_seed(42);
        let mut seen = HashSet::new();
        for s in 1..=50 {
            for f in 0..s {
                let name = gen.get_field_name(s, f).to_owned();
                assert!(is_valid_identifier(&name), "bad identifier {:?}", name);
                assert!(!gen.is_reserved(&name));
                assert!(seen.insert(name));
            }
        }
        assert_eq!(gen.allocated_count(), 50 * 51 / 2);
    }

    #[test]
    fn same_seed_same_names() {
        let mut a = NameGen::with_seed(1234);
        let mut b = NameGen::with_seed(1234);
        for f in 0..10 {
            assert_eq!(a.get_field_name(10, f), b.get_field_name(10, f));
        }
    }

    #[test]
    fn identifier_grammar() {
        assert!(is_valid_identifier("_"));
        assert!(is_valid_identifier("a1_B"));
        assert!(is_valid_identifier(&"x".repeat(MAX_NAME_LEN)));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("1abc"));
        assert!(!is_valid_identifier("a-b"));
        assert!(!is_valid_identifier(&"x".repeat(MAX_NAME_LEN + 1)));
    }

    #[test]
    fn reserved_words_are_marked_used() {
        let gen = NameGen::with_seed(0);
        for word in RESERVED_WORDS {
            assert!(gen.is_reserved(word));
            assert!(gen.used.contains(*word));
        }
        assert!(!gen.is_reserved("Aggregate1"));
    }

    proptest! {
        #[test]
        fn drawn_names_are_identifiers(seed in any::<u64>()) {
            let mut gen = NameGen::with_seed(seed);
            for f in 0..20 {
                let name = gen.get_field_name(20, f);
                prop_assert!(is_valid_identifier(name));
                prop_assert!(!RESERVED_WORDS.contains(&name));
            }
        }

        #[test]
        fn every_key_gets_its_own_name(seed in any::<u64>(), structs in 1usize..12) {
            let mut gen = NameGen::with_seed(seed);
            let mut seen = HashSet::new();
            for s in 1..=structs {
                for f in 0..s {
                    prop_assert!(seen.insert(gen.get_field_name(s, f).to_owned()));
                }
            }
            prop_assert_eq!(gen.allocated_count(), structs * (structs + 1) / 2);
        }
    }
}

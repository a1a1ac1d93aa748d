use std::fmt::{self, Display};

use crate::cpp_types::{AggregateDef, GetNameTest, NamesAsArrayTest};

const PREAMBLE: &str = r#"#include <boost/pfr/core_name.hpp>
#include <array>
#include <type_traits>

#include <boost/core/lightweight_test.hpp>

namespace testing {

template <class... Types>
auto make_stdarray(const Types&... t) {
    return std::array<std::common_type_t<Types...>, sizeof...(Types)>{t...};
}
"#;

/// The whole generated translation unit.
#[derive(Debug)]
pub struct Document {
    pub structs: Vec<AggregateDef>,
    pub get_name_tests: Vec<GetNameTest>,
    pub names_as_array_tests: Vec<NamesAsArrayTest>,
}

impl Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(PREAMBLE)?;
        for s in &self.structs {
            writeln!(f)?;
            s.fmt(f)?;
        }
        for t in &self.get_name_tests {
            writeln!(f)?;
            t.fmt(f)?;
        }
        for t in &self.names_as_array_tests {
            writeln!(f)?;
            t.fmt(f)?;
        }
        writeln!(f)?;
        writeln!(f, "}} // namespace testing")?;
        writeln!(f)?;
        writeln!(f, "int main() {{")?;
        for t in &self.get_name_tests {
            writeln!(f, "    testing::{}();", t.fn_name())?;
        }
        for t in &self.names_as_array_tests {
            writeln!(f, "    testing::{}();", t.fn_name())?;
        }
        writeln!(f)?;
        writeln!(f, "    return boost::report_errors();")?;
        writeln!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> Document {
        let one = vec!["a".to_owned()];
        let two = vec!["b".to_owned(), "c".to_owned()];
        Document {
            structs: vec![
                AggregateDef { id: 1, fields: one.clone() },
                AggregateDef { id: 2, fields: two.clone() },
            ],
            get_name_tests: vec![
                GetNameTest { id: 1, fields: one.clone() },
                GetNameTest { id: 2, fields: two.clone() },
            ],
            names_as_array_tests: vec![
                NamesAsArrayTest { id: 1, fields: one },
                NamesAsArrayTest { id: 2, fields: two },
            ],
        }
    }

    fn position(src: &str, needle: &str) -> usize {
        src.find(needle)
            .unwrap_or_else(|| panic!("{:?} not in document", needle))
    }

    #[test]
    fn sections_are_in_order() {
        let src = doc().to_string();
        let order = [
            "#include <boost/pfr/core_name.hpp>",
            "namespace testing {",
            "auto make_stdarray(",
            "struct Aggregate1 {",
            "struct Aggregate2 {",
            "void test_get_name_1() {",
            "void test_get_name_2() {",
            "void test_names_as_array_1() {",
            "void test_names_as_array_2() {",
            "} // namespace testing",
            "int main() {",
            "    testing::test_get_name_1();",
            "    testing::test_get_name_2();",
            "    testing::test_names_as_array_1();",
            "    testing::test_names_as_array_2();",
            "    return boost::report_errors();",
        ];
        let positions: Vec<usize> = order.iter().map(|n| position(&src, n)).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{:?}", positions);
        assert!(src.ends_with("}\n"));
    }

    #[test]
    fn empty_suite_still_reports() {
        let empty = Document {
            structs: vec![],
            get_name_tests: vec![],
            names_as_array_tests: vec![],
        };
        let src = empty.to_string();
        assert!(!src.contains("struct Aggregate"));
        assert!(src.contains("int main() {\n\n    return boost::report_errors();\n}\n"));
    }
}

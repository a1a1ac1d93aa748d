use std::fmt::{self, Display};

const INDENT: &str = "    ";

/// `struct Aggregate<id>` with one `int` member per field.
#[derive(Debug)]
pub struct AggregateDef {
    pub id: usize,
    pub fields: Vec<String>,
}

/// `test_get_name_<id>`: one `get_name<i, Aggregate<id>>` check per field.
#[derive(Debug)]
pub struct GetNameTest {
    pub id: usize,
    pub fields: Vec<String>,
}

/// `test_names_as_array_<id>`: compares the whole `names_as_array` result.
#[derive(Debug)]
pub struct NamesAsArrayTest {
    pub id: usize,
    pub fields: Vec<String>,
}

pub fn aggregate_name(id: usize) -> String {
    format!("Aggregate{}", id)
}

impl Display for AggregateDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "struct {} {{", aggregate_name(self.id))?;
        for name in &self.fields {
            writeln!(f, "{}int {};", INDENT, name)?;
        }
        writeln!(f, "}};")
    }
}

impl GetNameTest {
    pub fn fn_name(&self) -> String {
        format!("test_get_name_{}", self.id)
    }
}

impl Display for GetNameTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "void {}() {{", self.fn_name())?;
        for (i, name) in self.fields.iter().enumerate() {
            writeln!(
                f,
                "{}BOOST_TEST_EQ( ((boost::pfr::get_name<{}, {}>())), \"{}\");",
                INDENT,
                i,
                aggregate_name(self.id),
                name
            )?;
        }
        writeln!(f, "}}")
    }
}

impl NamesAsArrayTest {
    pub fn fn_name(&self) -> String {
        format!("test_names_as_array_{}", self.id)
    }
}

impl Display for NamesAsArrayTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "void {}() {{", self.fn_name())?;
        writeln!(f, "{}const auto expected = make_stdarray(", INDENT)?;
        let mut it = self.fields.iter();
        if let Some(x) = it.next() {
            write!(f, "{0}{0}std::string_view{{\"{1}\"}}", INDENT, x)?;
            for t in it {
                write!(f, ",\n{0}{0}std::string_view{{\"{1}\"}}", INDENT, t)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{});", INDENT)?;
        writeln!(
            f,
            "{}const auto value = boost::pfr::names_as_array<{}>();",
            INDENT,
            aggregate_name(self.id)
        )?;
        writeln!(f, "{}BOOST_TEST_EQ(expected.size(), value.size());", INDENT)?;
        writeln!(f, "{}for (std::size_t i=0;i<expected.size();++i) {{", INDENT)?;
        writeln!(f, "{0}{0}BOOST_TEST_EQ(value[i], expected[i]);", INDENT)?;
        writeln!(f, "{}}}", INDENT)?;
        writeln!(f, "}}")
    }
}

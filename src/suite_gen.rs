use tracing::debug;

use crate::{
    cpp_types::{AggregateDef, GetNameTest, NamesAsArrayTest},
    document::Document,
    name_gen::NameGen,
};

/// Struct `i` gets `i` fields, so the struct count doubles as the largest
/// field count. Bigger aggregates push MSVC out of heap space.
pub const MAX_FIELD_COUNT: usize = 50;

pub struct SuiteGenerator {
    struct_count: usize,
    name_gen: NameGen,
}

impl SuiteGenerator {
    pub fn new(struct_count: usize, name_gen: NameGen) -> Self {
        debug_assert!(struct_count <= MAX_FIELD_COUNT);
        Self {
            struct_count,
            name_gen,
        }
    }

    pub fn struct_count(&self) -> usize {
        self.struct_count
    }

    pub fn name_gen(&self) -> &NameGen {
        &self.name_gen
    }

    pub fn field_names(&mut self, struct_id: usize) -> Vec<String> {
        (0..struct_id)
            .map(|field_id| self.name_gen.get_field_name(struct_id, field_id).to_owned())
            .collect()
    }

    pub fn gen_structs(&mut self) -> Vec<AggregateDef> {
        (1..=self.struct_count)
            .map(|id| {
                let fields = self.field_names(id);
                debug!(id, fields = fields.len(), "emitting aggregate");
                AggregateDef { id, fields }
            })
            .collect()
    }

    pub fn gen_get_name_tests(&mut self) -> Vec<GetNameTest> {
        (1..=self.struct_count)
            .map(|id| GetNameTest {
                id,
                fields: self.field_names(id),
            })
            .collect()
    }

    pub fn gen_names_as_array_tests(&mut self) -> Vec<NamesAsArrayTest> {
        (1..=self.struct_count)
            .map(|id| NamesAsArrayTest {
                id,
                fields: self.field_names(id),
            })
            .collect()
    }

    pub fn gen(&mut self) -> Document {
        Document {
            structs: self.gen_structs(),
            get_name_tests: self.gen_get_name_tests(),
            names_as_array_tests: self.gen_names_as_array_tests(),
        }
    }
}

//! Shared test utilities.

use crate::model::{Chunk, ChunkName, ChunkStore};

/// Creates a chunk with the given name and body.
pub fn make_chunk(name: &str, body: &str) -> Chunk {
    Chunk::with_body(ChunkName::new(name), body)
}

/// Creates a store from `(name, body)` pairs, in order.
pub fn make_store(chunks: &[(&str, &str)]) -> ChunkStore {
    chunks
        .iter()
        .map(|(name, body)| make_chunk(name, body))
        .collect()
}

/// A small document with two files and one macro chunk.
pub const SAMPLE_DOCUMENT: &str = "\
Some prose about the program.

<<main.c>>=
#include \"lib/io.h\"

int main(void)
{
    <<main body>>
}
@

The body just prints.

<<main body>>=
print_greeting();
return 0;
@

<<lib/io.h>>=
void print_greeting(void);
@
";

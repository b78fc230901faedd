//! Ad-hoc scanners for build files that are not C source. These share no
//! data model with the extractor; each produces its own record shape.

pub mod makefile;

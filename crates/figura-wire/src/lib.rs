//! Reader and writer for the figura scene record format.
//!
//! A scene file is a stream of whitespace-delimited tokens: one record per
//! shape, a one-token type tag followed by that variant's fields in a
//! fixed order. Record boundaries are implied purely by each variant's
//! known field count, so the reader and writer here deal only in tokens;
//! the object model decides what the tokens mean.
//!
//! This crate is intentionally dependency-free so scene files can be
//! inspected by external tooling without pulling in the object model.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`error`] | `WireError` |
//! | [`reader`] | `TokenReader` |
//! | [`writer`] | `RecordWriter` |
//!
//! # Quick start
//!
//! ```rust
//! use figura_wire::{RecordWriter, TokenReader};
//!
//! let mut w = RecordWriter::new();
//! w.field("C").field(0).field(0).field("red").field(1).field(10).field(5);
//! w.end_record();
//! let src = w.finish();
//! assert_eq!(src, "C 0 0 red 1 10 5\n");
//!
//! let mut r = TokenReader::new(&src);
//! assert_eq!(r.next_token(), Some("C"));
//! assert_eq!(r.read_i32().unwrap(), 0);
//! ```

pub mod error;
pub mod reader;
pub mod writer;

pub use error::WireError;
pub use reader::TokenReader;
pub use writer::RecordWriter;

#[cfg(test)]
mod wire_tests {
    use super::*;

    #[test]
    fn tokens_split_on_any_whitespace() {
        let mut r = TokenReader::new("C 0\t0\nred  1");
        assert_eq!(r.next_token(), Some("C"));
        assert_eq!(r.next_token(), Some("0"));
        assert_eq!(r.next_token(), Some("0"));
        assert_eq!(r.next_token(), Some("red"));
        assert_eq!(r.next_token(), Some("1"));
        assert_eq!(r.next_token(), None);
    }

    #[test]
    fn clean_end_of_stream() {
        let mut r = TokenReader::new("  \n\t ");
        assert!(r.at_end());
        assert_eq!(r.next_token(), None);
    }

    #[test]
    fn negative_integers() {
        let mut r = TokenReader::new("-12 7");
        assert_eq!(r.read_i32().unwrap(), -12);
        assert_eq!(r.read_i32().unwrap(), 7);
    }

    #[test]
    fn integer_parse_failure_names_the_token() {
        let mut r = TokenReader::new("ten");
        let err = r.read_i32().unwrap_err();
        assert!(err.message.contains("\"ten\""));
    }

    #[test]
    fn flag_is_strictly_zero_or_one() {
        let mut r = TokenReader::new("1 0 true");
        assert!(r.read_flag().unwrap());
        assert!(!r.read_flag().unwrap());
        assert!(r.read_flag().is_err());
    }

    #[test]
    fn truncated_stream_is_an_error() {
        let mut r = TokenReader::new("C 0");
        r.next_token();
        r.read_i32().unwrap();
        let err = r.expect_token().unwrap_err();
        assert!(err.message.contains("end of stream"));
    }

    #[test]
    fn error_points_at_the_offending_token() {
        let mut r = TokenReader::new("C 0 0 red 1 10 5\nR 10 oops");
        for _ in 0..9 {
            r.next_token();
        }
        let err = r.read_i32().unwrap_err();
        assert_eq!((err.line, err.col), (2, 6));
    }

    #[test]
    fn writer_emits_exact_records() {
        let mut w = RecordWriter::new();
        w.field("C").field(0).field(0).field("red").field(1).field(10).field(5);
        w.end_record();
        w.field("R").field(10).field(10).field("blue").field(1).field(10).field(4).field(6);
        w.end_record();
        assert_eq!(w.finish(), "C 0 0 red 1 10 5\nR 10 10 blue 1 10 4 6\n");
    }

    #[test]
    fn writer_round_trips_through_reader() {
        let mut w = RecordWriter::new();
        w.field("Composite").field(1).end_record();
        w.field("C").field(1).field(1).field("x").field(1).field(10).field(2).end_record();
        let src = w.finish();
        let mut r = TokenReader::new(&src);
        assert_eq!(r.next_token(), Some("Composite"));
        assert_eq!(r.read_usize().unwrap(), 1);
        assert_eq!(r.next_token(), Some("C"));
    }

    #[test]
    fn display_includes_position() {
        let err = WireError::new("bad token", 3, 7);
        assert_eq!(err.to_string(), "wire error at 3:7: bad token");
    }
}

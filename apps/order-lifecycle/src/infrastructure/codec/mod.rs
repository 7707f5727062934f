//! Wire codecs.

mod json;

pub use json::{
    CodecError, InboundRecord, decode_record, decode_report, decode_state, encode_state,
};

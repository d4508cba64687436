//! Debug example showing the wire layout and the reader's trace events
//!
//! Run with `RUST_LOG=protokit=trace` to see every nested message and
//! unknown field the reader passes through.

use protokit::{Message, ProtobufWriter, RawMessage, Tag, UnknownField};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("protokit Debug Example");
    println!("======================");

    let inner = RawMessage::new(vec![UnknownField::Varint(1, 150)]);

    let mut writer = ProtobufWriter::new(Vec::new());
    writer
        .write_int32(1, -1)?
        .write_string(2, "testing")?
        .write_message(3, Some(&inner))?
        .write_fixed32(4, 7)?;
    let data = writer.finish()?;

    println!("Serialized data: {:02x?}", data);
    println!("Data length: {}", data.len());

    // First byte is always a tag
    let tag = Tag::from_value(u32::from(data[0]));
    println!(
        "First tag: number {}, wire type {}",
        tag.number(),
        tag.wire_type()?
    );

    let message = RawMessage::parse(&data)?;
    for field in message.fields() {
        println!(
            "Field {} ({}): {} bytes on the wire",
            field.number(),
            field.wire_type(),
            field.protobuf_size()
        );
    }

    match RawMessage::parse(&data[..data.len() - 2]) {
        Ok(_) => println!("Truncated payload parsed unexpectedly"),
        Err(e) => println!("Truncated payload: {}", e),
    }

    Ok(())
}

//! Basic usage example for protokit
//!
//! `Person` is written by hand in the shape generated message code takes.

use std::io::{Read, Write};

use protokit::{
    merge, size, FieldDescriptor, FieldKind, Message, MessageBuilder, ProtobufReader,
    ProtobufWriter, Result,
};

#[derive(Debug, Clone, PartialEq, Default)]
struct Person {
    id: u64,
    name: String,
    scores: Vec<i32>,
    friend: Option<Box<Person>>,
}

static EMPTY_PERSON: Person = Person {
    id: 0,
    name: String::new(),
    scores: Vec::new(),
    friend: None,
};

impl Message for Person {
    type Builder = PersonBuilder;

    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::single(1, "id", FieldKind::Uint64),
        FieldDescriptor::single(2, "name", FieldKind::String),
        FieldDescriptor::packed(3, "scores", FieldKind::Int32),
        FieldDescriptor::single(4, "friend", FieldKind::Message),
    ];

    fn empty() -> &'static Self {
        &EMPTY_PERSON
    }

    fn read_from<R: Read>(reader: &mut ProtobufReader<R>) -> Result<Self> {
        let mut builder = Self::builder();
        while let Some(tag) = reader.tag()? {
            let Some(field) = reader.field::<Self>(tag)? else {
                reader.skip(tag)?;
                continue;
            };
            match field.number {
                1 => builder.id = reader.uint64(tag, field.name)?,
                2 => builder.name = reader.string(tag, field.name)?,
                3 => reader.int32_repeated(tag, field.name, &mut builder.scores)?,
                4 => {
                    let friend: Person = reader.message(tag, field.name)?;
                    merge::boxed_message(&mut builder.friend, Some(&friend));
                }
                _ => reader.skip(tag)?,
            }
        }
        Ok(builder.build())
    }

    fn write_to<W: Write>(&self, writer: &mut ProtobufWriter<W>) -> Result<()> {
        writer
            .write_uint64(1, self.id)?
            .write_string(2, &self.name)?
            .write_int32_packed(3, &self.scores)?
            .write_message(4, self.friend.as_deref())?;
        Ok(())
    }

    fn protobuf_size(&self) -> usize {
        size::of_uint64(1, &self.id)
            + size::of_string(2, &self.name)
            + size::of_int32_packed(3, &self.scores)
            + size::message(4, self.friend.as_deref())
    }
}

#[derive(Debug, Clone, Default)]
struct PersonBuilder {
    id: u64,
    name: String,
    scores: Vec<i32>,
    friend: Option<Box<Person>>,
}

impl MessageBuilder for PersonBuilder {
    type Message = Person;

    fn merge(&mut self, message: &Person) -> &mut Self {
        merge::value(&mut self.id, &message.id);
        merge::value(&mut self.name, &message.name);
        merge::repeated(&mut self.scores, &message.scores);
        merge::boxed_message(&mut self.friend, message.friend.as_deref());
        self
    }

    fn build(&self) -> Person {
        Person {
            id: self.id,
            name: self.name.clone(),
            scores: self.scores.clone(),
            friend: self.friend.clone(),
        }
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("protokit Basic Usage Example");
    println!("============================");

    let person = Person {
        id: 12345,
        name: "Ada".to_string(),
        scores: vec![3, 270, 86942],
        friend: Some(Box::new(Person {
            id: 2,
            name: "Grace".to_string(),
            ..Person::default()
        })),
    };

    let data = person.to_bytes()?;
    println!("Serialized message: {} bytes", data.len());
    println!("   Calculated size: {} bytes", person.protobuf_size());
    println!("   Bytes: {:02x?}", data);

    let parsed = Person::parse(&data)?;
    println!("\nParsed message:");
    println!("   ID: {}", parsed.id);
    println!("   Name: {}", parsed.name);
    println!("   Scores: {:?}", parsed.scores);
    if let Some(friend) = &parsed.friend {
        println!("   Friend: {} ({})", friend.name, friend.id);
    }
    assert_eq!(parsed, person);

    let update = Person {
        name: "Ada Lovelace".to_string(),
        ..Person::default()
    };
    let merged = parsed.merge(&update);
    println!("\nMerged name: {} (id kept: {})", merged.name, merged.id);

    println!("\nEmpty message encodes to {} bytes", Person::empty().to_bytes()?.len());

    Ok(())
}

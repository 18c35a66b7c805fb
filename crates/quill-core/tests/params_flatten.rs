use pretty_assertions::assert_eq;
use quill_core::params::{Arg, Record};
use quill_core::schema::*;
use quill_core::stmt::{Type, Value};
use std_util::prelude::*;

use chrono::{FixedOffset, TimeZone, Utc};
use std::any::type_name;
use std::sync::Arc;

struct User {
    id: i64,
    name: String,
}

impl Record for User {
    fn field_value(&self, index: usize) -> Value {
        match index {
            0 => self.id.into(),
            1 => (&self.name).into(),
            _ => Value::Null,
        }
    }
}

struct Tag {
    name: String,
}

impl Record for Tag {
    fn field_value(&self, index: usize) -> Value {
        match index {
            0 => (&self.name).into(),
            _ => Value::Null,
        }
    }
}

/// Never registered.
struct Draft;

impl Record for Draft {
    fn field_value(&self, _index: usize) -> Value {
        Value::I64(1)
    }
}

fn schema_with(tz: TimeZones) -> Schema {
    let mut id = Field::new("id", 0, Type::I64);
    id.primary_key = true;
    id.auto = Some(AutoStrategy::Increment);

    let mut tag_name = Field::new("name", 0, Type::Char(30));
    tag_name.primary_key = true;

    let mut builder = Schema::builder();
    builder.timezones(tz);
    assert_ok!(builder.register(Model::new(
        type_name::<User>(),
        "User",
        "user",
        vec![
            id,
            Field::new("name", 1, Type::Char(30)),
            Field::new("birthday", 2, Type::Date),
            Field::new("created", 3, Type::DateTime),
        ],
    )));
    assert_ok!(builder.register(Model::new(
        type_name::<Tag>(),
        "Tag",
        "tag",
        vec![tag_name],
    )));
    assert_ok!(builder.build())
}

fn schema() -> Schema {
    schema_with(TimeZones::utc())
}

fn offset(hours: i32) -> FixedOffset {
    FixedOffset::east_opt(hours * 3600).unwrap()
}

fn strings(values: &[&str]) -> Vec<Value> {
    values.iter().map(|v| Value::from(*v)).collect()
}

#[test]
fn scalars_pass_through() {
    let schema = schema();
    let params = assert_ok!(schema.flatten_params(
        None,
        &[10.into(), "bob".into(), true.into(), 1.5.into(), 7u8.into()]
    ));

    assert_eq!(
        params,
        [
            Value::I64(10),
            Value::from("bob"),
            Value::Bool(true),
            Value::F64(1.5),
            Value::U64(7),
        ]
    );
}

#[test]
fn empty_input_gives_empty_output() {
    let schema = schema();
    assert!(assert_ok!(schema.flatten_params(None, &[])).is_empty());
    assert!(assert_ok!(schema.flatten_params(None, &[Arg::list(Vec::<i64>::new())])).is_empty());
}

#[test]
fn lists_expand_in_place() {
    let schema = schema();
    let params = assert_ok!(schema.flatten_params(
        None,
        &[
            1.into(),
            Arg::list([2, 3]),
            Arg::List(vec![Arg::list(["a", "b"]), 4.into()]),
        ]
    ));

    assert_eq!(
        params,
        [
            Value::I64(1),
            Value::I64(2),
            Value::I64(3),
            Value::from("a"),
            Value::from("b"),
            Value::I64(4),
        ]
    );
}

#[test]
fn null_is_kept_at_top_level_and_dropped_in_lists() {
    let schema = schema();
    let params = assert_ok!(schema.flatten_params(
        None,
        &[
            Arg::Null,
            Option::<i64>::None.into(),
            Arg::list([Some(1), None, Some(2)]),
        ]
    ));

    assert_eq!(
        params,
        [Value::Null, Value::Null, Value::I64(1), Value::I64(2)]
    );
}

#[test]
fn bytes_are_one_value() {
    let schema = schema();
    let params = assert_ok!(schema.flatten_params(
        None,
        &[b"\x00\x01\x02".as_slice().into(), vec![9u8].into()]
    ));

    assert_eq!(
        params,
        [Value::Bytes(vec![0, 1, 2]), Value::Bytes(vec![9])]
    );
}

#[test]
fn indirect_values_are_unwrapped() {
    let schema = schema();
    let params = assert_ok!(schema.flatten_params(
        None,
        &[Arg::indirect(5), Arg::indirect(Arg::list([6, 7]))]
    ));

    assert_eq!(params, [Value::I64(5), Value::I64(6), Value::I64(7)]);
}

#[test]
fn wrapped_nulls_are_dropped_from_lists() {
    let schema = schema();
    let params = assert_ok!(schema.flatten_params(
        None,
        &[
            Arg::indirect(Arg::Null),
            Arg::List(vec![
                Arg::indirect(Arg::Null),
                1.into(),
                Arg::indirect(Arg::indirect(Option::<i64>::None)),
                2.into(),
            ]),
        ]
    ));

    assert_eq!(params, [Value::Null, Value::I64(1), Value::I64(2)]);
}

#[test]
fn records_are_replaced_by_their_key() {
    let schema = schema();
    let user = User {
        id: 42,
        name: "alice".into(),
    };
    let tag = Tag {
        name: "rust".into(),
    };

    let params = assert_ok!(schema.flatten_params(
        None,
        &[Arg::record(&user), Arg::record(&tag), Arg::indirect(Arg::record(&user))]
    ));

    assert_eq!(
        params,
        [Value::I64(42), Value::from("rust"), Value::I64(42)]
    );
}

#[test]
fn lists_of_records_become_lists_of_keys() {
    let schema = schema();
    let users = [
        User {
            id: 1,
            name: "a".into(),
        },
        User {
            id: 2,
            name: "b".into(),
        },
    ];

    let params = assert_ok!(schema.flatten_params(None, &[Arg::list(users.iter().map(Arg::record))]));
    assert_eq!(params, [Value::I64(1), Value::I64(2)]);
}

#[test]
fn unpersisted_record_fails_without_partial_output() {
    let schema = schema();
    let fresh = User {
        id: 0,
        name: "new".into(),
    };

    let err = assert_err!(schema.flatten_params(None, &[1.into(), Arg::record(&fresh)]));
    assert!(err.is_invalid_argument());
    assert!(err.to_string().contains("no persisted primary key"), "{err}");

    let blank = Tag {
        name: String::new(),
    };
    let err = assert_err!(schema.flatten_params(None, &[Arg::list([Arg::record(&blank)])]));
    assert!(err.is_invalid_argument());
}

#[test]
fn unregistered_record_fails() {
    let schema = schema();
    let err = assert_err!(schema.flatten_params(None, &[Arg::record(&Draft)]));

    assert!(err.is_invalid_argument());
    assert!(err.to_string().contains("not a registered model"), "{err}");
}

#[test]
fn datetimes_use_the_working_timezone() {
    let schema = schema_with(TimeZones::new(offset(2), offset(0)));
    let ts = offset(10).with_ymd_and_hms(2024, 3, 15, 23, 30, 0).unwrap();

    let params = assert_ok!(schema.flatten_params(None, &[ts.into()]));
    assert_eq!(params, strings(&["2024-03-15 15:30:00"]));

    // An explicit timezone wins over the configured one.
    let params = assert_ok!(schema.flatten(None, &[ts.into()], &offset(-5)));
    assert_eq!(params, strings(&["2024-03-15 08:30:00"]));
}

#[test]
fn date_fields_use_the_reference_timezone() {
    let schema = schema_with(TimeZones::new(offset(-5), offset(10)));
    let user = schema.model_by_name(type_name::<User>()).unwrap();
    let birthday = user.field_by_name("birthday").unwrap();
    let created = user.field_by_name("created").unwrap();

    let ts = Utc.with_ymd_and_hms(2024, 3, 15, 20, 0, 0).unwrap();

    let params = assert_ok!(schema.flatten_params(Some(birthday), &[ts.into()]));
    assert_eq!(params, strings(&["2024-03-16"]));

    let params = assert_ok!(schema.flatten_params(Some(created), &[ts.into()]));
    assert_eq!(params, strings(&["2024-03-15 15:00:00"]));

    let params = assert_ok!(schema.flatten_params(Some(birthday), &[Arg::list([ts, ts])]));
    assert_eq!(params, strings(&["2024-03-16", "2024-03-16"]));
}

#[test]
fn shared_schema_flattens_concurrently() {
    let schema = Arc::new(schema());

    std::thread::scope(|scope| {
        for id in 1..=8 {
            let schema = schema.clone();
            scope.spawn(move || {
                let user = User {
                    id,
                    name: format!("user{id}"),
                };
                let params = schema
                    .flatten_params(None, &[Arg::record(&user), Arg::list([id, id + 1])])
                    .unwrap();
                assert_eq!(params, [Value::I64(id), Value::I64(id), Value::I64(id + 1)]);
            });
        }
    });
}

#[test]
fn flat_scalars_are_unchanged() {
    let schema = schema();
    let input = [Value::I64(1), Value::from("a"), Value::Bool(true), Value::F64(3.25)];

    let args: Vec<Arg<'_>> = input.iter().cloned().map(Arg::from).collect();
    let params = assert_ok!(schema.flatten_params(None, &args));
    assert_eq!(params, input);

    let args: Vec<Arg<'_>> = params.iter().cloned().map(Arg::from).collect();
    assert_eq!(assert_ok!(schema.flatten_params(None, &args)), input);
}

#[test]
fn date_field_keeps_the_calendar_day_of_the_reference_timezone() {
    let schema = schema();
    let user = schema.model_by_name(type_name::<User>()).unwrap();
    let birthday = user.field_by_name("birthday").unwrap();
    let ts = offset(10).with_ymd_and_hms(2024, 3, 15, 23, 30, 0).unwrap();

    let params = assert_ok!(schema.flatten(Some(birthday), &[ts.into()], &offset(0)));
    assert_eq!(params, strings(&["2024-03-15"]));

    let params = assert_ok!(schema.flatten(None, &[ts.into()], &offset(0)));
    assert_eq!(params, strings(&["2024-03-15 13:30:00"]));
}

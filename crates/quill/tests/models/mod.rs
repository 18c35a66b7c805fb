#![allow(dead_code)]

use quill::schema::{DeclaredTy as Ty, ModelDef};
use quill::{Model, Record, Value};

use chrono::{DateTime, FixedOffset, Offset, Utc};

fn timestamp(ts: &Option<DateTime<FixedOffset>>) -> Value {
    match ts {
        Some(ts) => Value::date_time(ts, &Utc.fix()),
        None => Value::Null,
    }
}

#[derive(Debug, Default)]
pub struct User {
    pub id: i64,
    pub user_name: String,
    pub email: String,
    pub password: String,
    pub status: i16,
    pub is_staff: bool,
    pub created: Option<DateTime<FixedOffset>>,
    pub updated: Option<DateTime<FixedOffset>>,
    pub profile: Option<Box<Profile>>,
    pub posts: Vec<Post>,
    pub should_skip: String,
}

impl Model for User {
    fn schema() -> ModelDef {
        ModelDef::new::<Self>()
            .field("id", Ty::I64, "auto")
            .field("user_name", Ty::String, "size(30);unique")
            .field("email", Ty::String, "size(100)")
            .field("password", Ty::String, "size(100)")
            .field("status", Ty::I16, "column(Status)")
            .field("is_staff", Ty::Bool, "")
            .field("created", Ty::Time, "auto_now_add;type(date)")
            .field("updated", Ty::Time, "auto_now")
            .field("profile", Ty::model::<Profile>(), "null;rel(one);on_delete(set_null)")
            .field("posts", Ty::model_list::<Post>(), "reverse(many)")
            .field("should_skip", Ty::String, "-")
    }
}

impl Record for User {
    fn field_value(&self, index: usize) -> Value {
        match index {
            0 => self.id.into(),
            1 => (&self.user_name).into(),
            2 => (&self.email).into(),
            3 => (&self.password).into(),
            4 => self.status.into(),
            5 => self.is_staff.into(),
            6 => timestamp(&self.created),
            7 => timestamp(&self.updated),
            8 => self.profile.as_ref().map(|profile| profile.id).into(),
            _ => Value::Null,
        }
    }
}

#[derive(Debug, Default)]
pub struct Profile {
    pub id: i64,
    pub age: i16,
    pub money: f64,
}

impl Model for Profile {
    fn schema() -> ModelDef {
        ModelDef::new::<Self>()
            .table("user_profile")
            .field("id", Ty::I64, "")
            .field("age", Ty::I16, "")
            .field("money", Ty::F64, "digits(8);decimals(4)")
            .field("user", Ty::model::<User>(), "reverse(one)")
    }
}

impl Record for Profile {
    fn field_value(&self, index: usize) -> Value {
        match index {
            0 => self.id.into(),
            1 => self.age.into(),
            2 => self.money.into(),
            _ => Value::Null,
        }
    }
}

#[derive(Debug, Default)]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub content: String,
    pub created: Option<DateTime<FixedOffset>>,
}

impl Model for Post {
    fn schema() -> ModelDef {
        ModelDef::new::<Self>()
            .field("id", Ty::I64, "auto")
            .field("user", Ty::model::<User>(), "rel(fk)")
            .field("title", Ty::String, "size(60)")
            .field("content", Ty::String, "type(text)")
            .field("created", Ty::Time, "auto_now_add")
            .field("tags", Ty::model_list::<Tag>(), "rel(m2m)")
    }
}

impl Record for Post {
    fn field_value(&self, index: usize) -> Value {
        match index {
            0 => self.id.into(),
            1 => self.user_id.into(),
            2 => (&self.title).into(),
            3 => (&self.content).into(),
            4 => timestamp(&self.created),
            _ => Value::Null,
        }
    }
}

#[derive(Debug, Default)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub best_post_id: Option<i64>,
}

impl Model for Tag {
    fn schema() -> ModelDef {
        ModelDef::new::<Self>()
            .field("id", Ty::I64, "auto")
            .field("name", Ty::String, "size(30)")
            .field("best_post", Ty::model::<Post>(), "rel(one);null")
            .field("posts", Ty::model_list::<Post>(), "reverse(many)")
    }
}

impl Record for Tag {
    fn field_value(&self, index: usize) -> Value {
        match index {
            0 => self.id.into(),
            1 => (&self.name).into(),
            2 => self.best_post_id.into(),
            _ => Value::Null,
        }
    }
}

#[derive(Debug, Default)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub content: String,
    pub parent_id: Option<i64>,
    pub created: Option<DateTime<FixedOffset>>,
}

impl Model for Comment {
    fn schema() -> ModelDef {
        ModelDef::new::<Self>()
            .field("id", Ty::I64, "auto")
            .field("post", Ty::model::<Post>(), "rel(fk);column(post)")
            .field("content", Ty::String, "type(text)")
            .field("parent", Ty::model::<Comment>(), "null;rel(fk)")
            .field("created", Ty::Time, "auto_now_add")
    }
}

impl Record for Comment {
    fn field_value(&self, index: usize) -> Value {
        match index {
            0 => self.id.into(),
            1 => self.post_id.into(),
            2 => (&self.content).into(),
            3 => self.parent_id.into(),
            4 => timestamp(&self.created),
            _ => Value::Null,
        }
    }
}

/// A record keyed by a string.
#[derive(Debug, Default)]
pub struct Country {
    pub code: String,
    pub name: String,
}

impl Model for Country {
    fn schema() -> ModelDef {
        ModelDef::new::<Self>()
            .field("code", Ty::String, "pk;size(2)")
            .field("name", Ty::String, "")
    }
}

impl Record for Country {
    fn field_value(&self, index: usize) -> Value {
        match index {
            0 => (&self.code).into(),
            1 => (&self.name).into(),
            _ => Value::Null,
        }
    }
}

pub fn registry() -> quill::Registry {
    let mut builder = quill::Registry::builder();
    builder
        .register::<User>()
        .and_then(|b| b.register::<Profile>())
        .and_then(|b| b.register::<Post>())
        .and_then(|b| b.register::<Tag>())
        .and_then(|b| b.register::<Comment>())
        .and_then(|b| b.register::<Country>())
        .unwrap();
    builder.build().unwrap()
}

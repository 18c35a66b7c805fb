use super::{DeclaredTy, Rel, Reverse, Tag, TagType};
use quill_core::schema::{
    self as app, AutoStrategy, BelongsTo, FieldTy, HasMany, HasOne, ManyToMany, OnDelete,
};
use quill_core::{stmt, Error, Result};
use std_util::str;

use std::any::type_name;

/// A model as declared by its type, before registration.
#[derive(Debug, Clone)]
pub struct ModelDef {
    /// Fully-qualified type name
    pub full_name: String,

    /// Short type name
    pub name: String,

    /// Explicit table name. Defaults to the snake-cased type name.
    pub table_name: Option<String>,

    /// Fields in declaration order
    pub fields: Vec<FieldDef>,
}

#[derive(Debug, Clone)]
pub struct FieldDef {
    pub name: String,
    pub ty: DeclaredTy,

    /// Unparsed directives, e.g. `"size(30);unique"`
    pub tag: String,
}

impl ModelDef {
    /// Starts a definition named after `T`.
    pub fn new<T: ?Sized + 'static>() -> Self {
        Self::named(type_name::<T>())
    }

    /// Starts a definition for the fully-qualified type name `full_name`.
    pub fn named(full_name: impl Into<String>) -> Self {
        let full_name = full_name.into();
        let name = short_name(&full_name).to_string();

        Self {
            full_name,
            name,
            table_name: None,
            fields: vec![],
        }
    }

    pub fn table(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = Some(table_name.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, ty: DeclaredTy, tag: &str) -> Self {
        self.fields.push(FieldDef {
            name: name.into(),
            ty,
            tag: tag.to_string(),
        });
        self
    }

    /// Derives the registry descriptor.
    pub fn to_model(&self) -> Result<app::Model> {
        let mut fields = vec![];

        for (field_index, def) in self.fields.iter().enumerate() {
            let tag = Tag::parse(&def.tag).map_err(|err| {
                err.context(Error::invalid_schema(format!(
                    "field `{}::{}` has an invalid tag",
                    self.name, def.name
                )))
            })?;

            if tag.skip {
                continue;
            }

            let field = self.to_field(field_index, def, &tag).map_err(|err| {
                err.context(quill_core::err!("field `{}::{}`", self.name, def.name))
            })?;
            fields.push(field);
        }

        self.apply_primary_key_convention(&mut fields);

        let table_name = self
            .table_name
            .clone()
            .unwrap_or_else(|| str::snake_case(&self.name));

        Ok(app::Model::new(
            self.full_name.clone(),
            &self.name,
            table_name,
            fields,
        ))
    }

    fn to_field(&self, field_index: usize, def: &FieldDef, tag: &Tag) -> Result<app::Field> {
        let ty = field_ty(&def.ty, tag)?;

        let column = match &tag.column {
            Some(column) => column.clone(),
            None if ty.is_belongs_to() => format!("{}_id", str::snake_case(&def.name)),
            None => str::snake_case(&def.name),
        };

        let mut field = app::Field::new(def.name.clone(), field_index, ty);
        field.name.storage_name = Some(column);
        field.nullable = tag.null;
        field.primary_key = tag.pk || tag.auto;
        field.unique = tag.unique;
        field.index = tag.index;
        field.default = tag.default.clone();

        field.auto = match (tag.auto, tag.auto_now, tag.auto_now_add) {
            (false, false, false) => None,
            (true, false, false) => Some(AutoStrategy::Increment),
            (false, true, false) => Some(AutoStrategy::Now),
            (false, false, true) => Some(AutoStrategy::NowAdd),
            _ => {
                return Err(Error::invalid_schema(
                    "only one of `auto`, `auto_now` and `auto_now_add` may be given",
                ))
            }
        };

        if let Some(on_delete) = tag.on_delete {
            let FieldTy::BelongsTo(belongs_to) = &mut field.ty else {
                return Err(Error::invalid_schema(
                    "`on_delete(..)` only applies to `rel(fk)` and `rel(one)` fields",
                ));
            };

            if on_delete.0 == OnDelete::SetNull && !tag.null {
                return Err(Error::invalid_schema(
                    "`on_delete(set_null)` requires the field to be `null`",
                ));
            }

            belongs_to.on_delete = on_delete.0;
        }

        Ok(field)
    }

    /// Without an explicit `pk` or `auto`, a field named `id` is the key. An
    /// integer `id` is also auto-incremented.
    fn apply_primary_key_convention(&self, fields: &mut [app::Field]) {
        if fields.iter().any(|field| field.primary_key) {
            return;
        }

        let Some(field) = fields
            .iter_mut()
            .find(|field| field.name.app_name.eq_ignore_ascii_case("id"))
        else {
            return;
        };

        field.primary_key = true;

        if field.auto.is_none() && field.storage_ty().is_some_and(|ty| ty.is_integer()) {
            field.auto = Some(AutoStrategy::Increment);
        }
    }
}

fn field_ty(declared: &DeclaredTy, tag: &Tag) -> Result<FieldTy> {
    let ty = match (declared, tag.rel, tag.reverse) {
        (DeclaredTy::Model(target), Some(Rel::Fk), None) => BelongsTo::new(target).into(),
        (DeclaredTy::Model(target), Some(Rel::One), None) => BelongsTo::one(target).into(),
        (DeclaredTy::ModelList(target), Some(Rel::M2m), None) => ManyToMany {
            link_table: tag.rel_table.clone(),
            ..ManyToMany::new(target)
        }
        .into(),
        (DeclaredTy::Model(target), None, Some(Reverse::One)) => HasOne::new(target).into(),
        (DeclaredTy::ModelList(target), None, Some(Reverse::Many)) => HasMany::new(target).into(),
        (DeclaredTy::Model(_) | DeclaredTy::ModelList(_), None, None) => {
            return Err(Error::invalid_schema(
                "the field references a model but declares no relation; \
                 add `rel(fk)`, `rel(one)`, `rel(m2m)`, `reverse(one)` or `reverse(many)`",
            ));
        }
        (DeclaredTy::Model(_) | DeclaredTy::ModelList(_), _, _) => {
            return Err(Error::invalid_schema(format!(
                "the relation does not fit the declared type {declared:?}; \
                 `rel(fk)`, `rel(one)` and `reverse(one)` need a model, \
                 `rel(m2m)` and `reverse(many)` a list of models"
            )));
        }
        (_, Some(_), _) | (_, _, Some(_)) => {
            return Err(Error::invalid_schema(format!(
                "relation target {declared:?} is not a model"
            )));
        }
        (declared, None, None) => primitive_ty(declared, tag)?.into(),
    };

    if tag.rel_table.is_some() && tag.rel != Some(Rel::M2m) {
        return Err(Error::invalid_schema(
            "`rel_table(..)` only applies to `rel(m2m)` fields",
        ));
    }

    Ok(ty)
}

fn primitive_ty(declared: &DeclaredTy, tag: &Tag) -> Result<stmt::Type> {
    if tag.size.is_some() && *declared != DeclaredTy::String {
        return Err(Error::invalid_schema("`size(..)` only applies to strings"));
    }

    if (tag.digits.is_some() || tag.decimals.is_some())
        && !matches!(declared, DeclaredTy::F32 | DeclaredTy::F64)
    {
        return Err(Error::invalid_schema(
            "`digits(..)` and `decimals(..)` only apply to floats",
        ));
    }

    let ty = match declared {
        DeclaredTy::Bool => stmt::Type::Bool,
        DeclaredTy::I8 => stmt::Type::I8,
        DeclaredTy::I16 => stmt::Type::I16,
        DeclaredTy::I32 => stmt::Type::I32,
        DeclaredTy::I64 => stmt::Type::I64,
        DeclaredTy::U8 => stmt::Type::U8,
        DeclaredTy::U16 => stmt::Type::U16,
        DeclaredTy::U32 => stmt::Type::U32,
        DeclaredTy::U64 => stmt::Type::U64,
        DeclaredTy::F32 | DeclaredTy::F64 => match (tag.digits, tag.decimals) {
            (Some(digits), Some(decimals)) => stmt::Type::Decimal { digits, decimals },
            (None, None) if *declared == DeclaredTy::F32 => stmt::Type::F32,
            (None, None) => stmt::Type::F64,
            _ => {
                return Err(Error::invalid_schema(
                    "`digits(..)` and `decimals(..)` must be given together",
                ))
            }
        },
        DeclaredTy::String => match tag.ty {
            None => stmt::Type::Char(tag.size.unwrap_or(stmt::Type::DEFAULT_CHAR_SIZE)),
            Some(TagType::Text) => stmt::Type::Text,
            Some(ty) => {
                return Err(Error::invalid_schema(format!(
                    "`type({ty:?})` does not apply to strings"
                )))
            }
        },
        DeclaredTy::Time => match tag.ty {
            None | Some(TagType::DateTime) => stmt::Type::DateTime,
            Some(TagType::Date) => stmt::Type::Date,
            Some(TagType::Text) => {
                return Err(Error::invalid_schema(
                    "`type(text)` does not apply to timestamps",
                ))
            }
        },
        DeclaredTy::Bytes => stmt::Type::Bytes,
        DeclaredTy::Other(name) => {
            return Err(Error::invalid_schema(format!(
                "type `{name}` cannot be mapped to a column"
            )))
        }
        DeclaredTy::Model(_) | DeclaredTy::ModelList(_) => {
            unreachable!("model references are handled by `field_ty`")
        }
    };

    if tag.ty.is_some() && !matches!(declared, DeclaredTy::String | DeclaredTy::Time) {
        return Err(Error::invalid_schema(
            "`type(..)` only applies to strings and timestamps",
        ));
    }

    Ok(ty)
}

/// `app::models::User` -> `User`, `app::Wrapper<app::User>` -> `Wrapper`.
fn short_name(full_name: &str) -> &str {
    let base = full_name.split('<').next().unwrap_or(full_name);
    base.rsplit("::").next().unwrap_or(base)
}

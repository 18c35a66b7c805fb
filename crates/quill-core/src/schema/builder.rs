use super::{FieldId, FieldTy, Model, ModelId, Schema, TimeZones};
use crate::{Error, Result};

use indexmap::IndexMap;
use std::collections::HashSet;

/// Registration phase of the model registry.
///
/// Models are registered one at a time; each registration either fully
/// succeeds or leaves the builder untouched. Relations may name models that
/// have not been registered yet. They are resolved by [`Builder::build`].
#[derive(Debug, Default)]
pub struct Builder {
    models: IndexMap<String, Model>,
    tz: TimeZones,
}

impl Builder {
    /// Set the timezone policy used when binding date and time values.
    pub fn timezones(&mut self, tz: TimeZones) -> &mut Self {
        self.tz = tz;
        self
    }

    pub fn is_registered(&self, full_name: &str) -> bool {
        self.models.contains_key(full_name)
    }

    pub fn models(&self) -> impl ExactSizeIterator<Item = &Model> {
        self.models.values()
    }

    /// Validate and register a model.
    pub fn register(&mut self, mut model: Model) -> Result<ModelId> {
        let primary_key = self.verify_model(&model)?;
        let id = ModelId(self.models.len());

        model.index(id, primary_key);

        tracing::debug!(
            model = %model.full_name,
            table = %model.table_name,
            fields = model.fields.len(),
            "registered model"
        );

        self.models.insert(model.full_name.clone(), model);
        Ok(id)
    }

    /// Ends registration. Links every relation to its target and returns the
    /// read-only schema.
    pub fn build(mut self) -> Result<Schema> {
        self.link_relations()?;

        tracing::info!(models = self.models.len(), "model registry built");

        Ok(Schema {
            models: self.models,
            tz: self.tz,
        })
    }

    /// Returns the position of the primary key field.
    fn verify_model(&self, model: &Model) -> Result<usize> {
        let model_name = model.name.upper_camel_case();

        if self.models.contains_key(&model.full_name) {
            return Err(Error::invalid_schema(format!(
                "model `{}` is already registered",
                model.full_name
            )));
        }

        if let Some(other) = self
            .models
            .values()
            .find(|other| other.table_name == model.table_name)
        {
            return Err(Error::invalid_schema(format!(
                "table `{}` of model `{}` is already used by model `{}`",
                model.table_name, model.full_name, other.full_name,
            )));
        }

        let mut names = HashSet::new();
        let mut columns = HashSet::new();

        for field in &model.fields {
            if !names.insert(field.name.app_name.as_str()) {
                return Err(Error::invalid_schema(format!(
                    "model `{model_name}` declares field `{}` more than once",
                    field.name.app_name,
                )));
            }

            if field.has_column() && !columns.insert(field.column()) {
                return Err(Error::invalid_schema(format!(
                    "column `{}` of model `{model_name}` is used by more than one field",
                    field.column(),
                )));
            }

            if let Some(auto) = field.auto {
                let ty = field.ty.as_primitive().map(|primitive| primitive.ty);
                let valid = if auto.is_increment() {
                    ty.is_some_and(|ty| ty.is_integer())
                } else {
                    ty.is_some_and(|ty| ty.is_time())
                };

                if !valid {
                    return Err(Error::invalid_schema(format!(
                        "field `{model_name}::{}` cannot be populated with {auto:?}; \
                         `Increment` needs an integer and `Now`/`NowAdd` a date or datetime",
                        field.name.app_name,
                    )));
                }
            }
        }

        let primary_keys: Vec<_> = model
            .fields
            .iter()
            .enumerate()
            .filter(|(_, field)| field.primary_key)
            .map(|(index, _)| index)
            .collect();

        let index = match primary_keys[..] {
            [index] => index,
            [] => {
                return Err(Error::invalid_schema(format!(
                    "model `{model_name}` has no primary key; tag a field with `pk` or name it `id`"
                )));
            }
            _ => {
                let names: Vec<_> = primary_keys
                    .iter()
                    .map(|index| format!("`{}`", model.fields[*index].name.app_name))
                    .collect();
                return Err(Error::invalid_schema(format!(
                    "model `{model_name}` has more than one primary key: {}",
                    names.join(", "),
                )));
            }
        };

        let field = &model.fields[index];

        match &field.ty {
            FieldTy::Primitive(primitive) if primitive.ty.is_key() => {}
            FieldTy::Primitive(primitive) => {
                return Err(Error::invalid_schema(format!(
                    "primary key `{model_name}::{}` has unsupported type {:?}; \
                     only integer and string keys are supported",
                    field.name.app_name, primitive.ty,
                )));
            }
            _ => {
                return Err(Error::invalid_schema(format!(
                    "primary key `{model_name}::{}` cannot be a relation",
                    field.name.app_name,
                )));
            }
        }

        if field.nullable {
            return Err(Error::invalid_schema(format!(
                "primary key `{model_name}::{}` cannot be nullable",
                field.name.app_name,
            )));
        }

        Ok(index)
    }

    /// Go through all relations, resolve their targets and link them to
    /// their pairs.
    fn link_relations(&mut self) -> Result<()> {
        // Models are mutated while other models are read, so iterate by index
        // rather than holding a reference to `self.models`.

        // First, resolve every target. The pairing passes below depend on it.
        for curr in 0..self.models.len() {
            for index in 0..self.models[curr].fields.len() {
                let model = &self.models[curr];
                let field = &model.fields[index];

                let Some(target_name) = field.relation_target_name() else {
                    continue;
                };

                let Some(target) = self.models.get_index_of(target_name) else {
                    return Err(Error::invalid_schema(format!(
                        "field `{}::{}` references model `{}`, which was not registered \
                         with the schema; did you forget to register it?",
                        model.name.upper_camel_case(),
                        field.name.app_name,
                        target_name,
                    )));
                };

                let key_ty = self.models[target].primary_key_field().storage_ty();
                let field = &mut self.models[curr].fields[index];

                field.ty.set_target(ModelId(target));
                if let FieldTy::BelongsTo(belongs_to) = &mut field.ty {
                    belongs_to.key_ty = key_ty;
                }
            }
        }

        // Link `HasOne` and `HasMany` to the relation on the target that
        // stores the key.
        for curr in 0..self.models.len() {
            for index in 0..self.models[curr].fields.len() {
                let pair = match &self.models[curr].fields[index].ty {
                    FieldTy::HasOne(has_one) => self.find_pair(
                        curr,
                        index,
                        has_one.target,
                        "`rel(one)`",
                        |ty| matches!(ty, FieldTy::BelongsTo(rel) if rel.unique),
                    )?,
                    FieldTy::HasMany(has_many) => self.find_pair(
                        curr,
                        index,
                        has_many.target,
                        "`rel(fk)` or `rel(m2m)`",
                        |ty| matches!(ty, FieldTy::BelongsTo(_) | FieldTy::ManyToMany(_)),
                    )?,
                    _ => continue,
                };

                match &mut self.models[curr].fields[index].ty {
                    FieldTy::HasOne(has_one) => has_one.pair = pair,
                    FieldTy::HasMany(has_many) => has_many.pair = pair,
                    _ => {}
                }
            }
        }

        // Finally, link the key-storing side back, and name link tables.
        for curr in 0..self.models.len() {
            for index in 0..self.models[curr].fields.len() {
                let field_id = self.models[curr].fields[index].id;

                let target = match &self.models[curr].fields[index].ty {
                    FieldTy::BelongsTo(belongs_to) => belongs_to.target,
                    FieldTy::ManyToMany(many_to_many) => many_to_many.target,
                    _ => continue,
                };

                let target_model = &self.models[target.0];
                let pair = target_model
                    .fields
                    .iter()
                    .find(|field| field.pair() == Some(field_id))
                    .map(|field| field.id);
                let link_table = format!(
                    "{}_{}s",
                    self.models[curr].table_name, target_model.table_name
                );

                let model = &mut self.models[curr];
                let field = &mut model.fields[index];

                match &mut field.ty {
                    FieldTy::BelongsTo(belongs_to) => belongs_to.pair = pair,
                    FieldTy::ManyToMany(many_to_many) => {
                        many_to_many.pair = pair;
                        many_to_many.link_table.get_or_insert(link_table);
                    }
                    _ => {}
                }

                tracing::debug!(
                    model = %model.full_name,
                    field = %field.name.app_name,
                    kind = ?field.relation_kind(),
                    paired = pair.is_some(),
                    "linked relation"
                );
            }
        }

        Ok(())
    }

    /// Find the single field on `target` that matches `accept` and points back
    /// at the model `src`.
    fn find_pair(
        &self,
        src: usize,
        index: usize,
        target: ModelId,
        expected: &str,
        accept: impl Fn(&FieldTy) -> bool,
    ) -> Result<FieldId> {
        let src_model = &self.models[src];
        let target_model = &self.models[target.0];

        let candidates: Vec<_> = target_model
            .fields
            .iter()
            .filter(|field| accept(&field.ty))
            .filter(|field| field.relation_target_id() == Some(ModelId(src)))
            .collect();

        match &candidates[..] {
            [field] => Ok(field.id),
            [] => Err(Error::invalid_schema(format!(
                "field `{}::{}` has no matching {expected} relation on model `{}`",
                src_model.name.upper_camel_case(),
                src_model.fields[index].name.app_name,
                target_model.name.upper_camel_case(),
            ))),
            _ => Err(Error::invalid_schema(format!(
                "model `{}` has more than one {expected} relation targeting `{}`",
                target_model.name.upper_camel_case(),
                src_model.name.upper_camel_case(),
            ))),
        }
    }
}

use crate::schema::ModelDef;
use crate::{Arg, Identity, Model, Result, TimeZones, Value};

use quill_core::schema::{self as app, Schema};
use quill_core::{err, Error};

use std::any::type_name;
use std::sync::Arc;

/// Registration phase. Collects models, then [`Builder::build`] links their
/// relations and freezes them into a [`Registry`].
#[derive(Debug, Default)]
pub struct Builder {
    core: app::Builder,
}

/// A built, read-only model registry.
///
/// Cloning is cheap and clones share the same schema, so a registry can be
/// handed to any number of threads.
#[derive(Debug, Clone)]
pub struct Registry {
    schema: Arc<Schema>,
}

impl Builder {
    pub fn register<T: Model>(&mut self) -> Result<&mut Self> {
        self.register_def(T::schema())
    }

    /// Registers a definition not tied to a Rust type.
    pub fn register_def(&mut self, def: ModelDef) -> Result<&mut Self> {
        let name = def.full_name.clone();

        tracing::trace!(model = %name, fields = def.fields.len(), "deriving model descriptor");

        def.to_model()
            .and_then(|model| self.core.register(model))
            .map_err(|e| e.context(err!("failed to register `{name}`")))?;

        Ok(self)
    }

    pub fn timezones(&mut self, tz: TimeZones) -> &mut Self {
        self.core.timezones(tz);
        self
    }

    pub fn is_registered<T: Model>(&self) -> bool {
        self.core.is_registered(type_name::<T>())
    }

    pub fn build(self) -> Result<Registry> {
        let schema = self.core.build()?;

        Ok(Registry {
            schema: Arc::new(schema),
        })
    }
}

impl Registry {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// Looks a model up by its fully-qualified type name.
    pub fn lookup(&self, full_name: &str) -> Option<&app::Model> {
        self.schema.model_by_name(full_name)
    }

    pub fn model<T: Model>(&self) -> Result<&app::Model> {
        let name = type_name::<T>();

        self.lookup(name)
            .ok_or_else(|| Error::invalid_argument(format!("model `{name}` is not registered")))
    }

    pub fn field<T: Model>(&self, name: &str) -> Result<&app::Field> {
        let model = self.model::<T>()?;

        model.field_by_name(name).ok_or_else(|| {
            Error::invalid_argument(format!(
                "model `{}` has no field `{name}`",
                model.name.upper_camel_case()
            ))
        })
    }

    pub fn resolve_identity<'a, T: Model>(&'a self, record: &T) -> Result<Identity<'a>> {
        self.model::<T>()?.identity_of(record)
    }

    /// See [`Schema::flatten`].
    pub fn flatten(
        &self,
        field: Option<&app::Field>,
        args: &[Arg<'_>],
        tz: &chrono::FixedOffset,
    ) -> Result<Vec<Value>> {
        self.schema.flatten(field, args, tz)
    }

    /// See [`Schema::flatten_params`].
    pub fn flatten_params(&self, field: Option<&app::Field>, args: &[Arg<'_>]) -> Result<Vec<Value>> {
        self.schema.flatten_params(field, args)
    }
}

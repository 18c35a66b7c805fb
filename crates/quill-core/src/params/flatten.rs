use super::{resolve_identity, Arg, Record};
use crate::schema::{Field, Schema};
use crate::stmt::Value;
use crate::{Error, Result};

use chrono::{DateTime, FixedOffset};

/// One flattening call. Holds only borrowed, read-only state.
struct Flatten<'a> {
    schema: &'a Schema,

    /// Supplies the date-only context for time values
    field: Option<&'a Field>,

    /// Timezone for datetime values
    tz: &'a FixedOffset,
}

impl Schema {
    /// Reduce `args` into a flat list of driver values.
    ///
    /// Lists are expanded in place, records are replaced by their primary key
    /// and timestamps are rendered as strings: as a date in the reference
    /// timezone when `field` is a date column, otherwise as a datetime in
    /// `tz`. Output order is the depth-first order of the input.
    ///
    /// Fails if a record argument cannot be reduced to a persisted primary
    /// key. No partial output is returned in that case.
    pub fn flatten(
        &self,
        field: Option<&Field>,
        args: &[Arg<'_>],
        tz: &FixedOffset,
    ) -> Result<Vec<Value>> {
        let mut params = Vec::with_capacity(args.len());

        Flatten {
            schema: self,
            field,
            tz,
        }
        .flatten_into(args, &mut params)?;

        Ok(params)
    }

    /// Same as [`Schema::flatten`], using the configured working timezone.
    pub fn flatten_params(&self, field: Option<&Field>, args: &[Arg<'_>]) -> Result<Vec<Value>> {
        self.flatten(field, args, &self.tz.working)
    }
}

impl Flatten<'_> {
    fn flatten_into(&self, args: &[Arg<'_>], params: &mut Vec<Value>) -> Result<()> {
        for arg in args {
            self.flatten_arg(arg, params)?;
        }

        Ok(())
    }

    fn flatten_arg(&self, arg: &Arg<'_>, params: &mut Vec<Value>) -> Result<()> {
        match arg {
            Arg::Null => params.push(Value::Null),
            Arg::Bytes(bytes) => params.push(Value::Bytes(bytes.clone())),
            Arg::DateTime(ts) => params.push(self.time(ts)),
            Arg::List(items) => {
                // Null elements carry nothing to bind inside a list; they are
                // dropped rather than bound as NULL.
                for item in items.iter().filter(|item| !item.is_null()) {
                    self.flatten_arg(item, params)?;
                }
            }
            Arg::Record(record) => params.push(self.record_key(*record)?),
            Arg::Indirect(inner) => self.flatten_arg(inner, params)?,
            Arg::Scalar(value) => params.push(value.clone()),
        }

        Ok(())
    }

    fn time(&self, ts: &DateTime<FixedOffset>) -> Value {
        match self.field {
            Some(field) if field.is_date() => Value::date(ts, &self.schema.tz.reference),
            _ => Value::date_time(ts, self.tz),
        }
    }

    fn record_key(&self, record: &dyn Record) -> Result<Value> {
        let name = record.model_name();

        let Some(model) = self.schema.model_by_name(name) else {
            return Err(Error::invalid_argument(format!(
                "cannot bind `{name}`: the type is not a registered model"
            )));
        };

        let identity = resolve_identity(model, record)?;

        if !identity.exists {
            return Err(Error::invalid_argument(format!(
                "cannot bind `{name}`: the record has no persisted primary key"
            )));
        }

        tracing::trace!(
            model = %model.full_name,
            column = identity.column,
            value = ?identity.value,
            "substituted record with its primary key"
        );

        Ok(identity.value)
    }
}

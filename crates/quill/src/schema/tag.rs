use quill_core::{schema::OnDelete, Error, Result};

/// Field directives parsed from a tag such as
/// `"size(30);unique"` or `"null;rel(one);on_delete(set_null)"`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tag {
    /// `-`: the field is not mapped.
    pub skip: bool,
    pub pk: bool,
    /// `auto`: auto-increment primary key.
    pub auto: bool,
    pub null: bool,
    pub unique: bool,
    pub index: bool,
    pub auto_now: bool,
    pub auto_now_add: bool,
    pub size: Option<u32>,
    pub digits: Option<u32>,
    pub decimals: Option<u32>,
    pub column: Option<String>,
    pub default: Option<String>,
    pub ty: Option<TagType>,
    pub rel: Option<Rel>,
    pub reverse: Option<Reverse>,
    pub rel_table: Option<String>,
    pub on_delete: Option<OnDeleteTag>,
}

/// `type(..)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagType {
    Date,
    DateTime,
    Text,
}

/// `rel(..)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rel {
    Fk,
    One,
    M2m,
}

/// `reverse(..)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reverse {
    One,
    Many,
}

/// `on_delete(..)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnDeleteTag(pub OnDelete);

impl Tag {
    pub fn parse(src: &str) -> Result<Tag> {
        let mut tag = Tag::default();

        for directive in src.split(';').map(str::trim).filter(|d| !d.is_empty()) {
            tag.apply(directive)
                .map_err(|err| err.context(quill_core::err!("in tag directive `{directive}`")))?;
        }

        if tag.rel.is_some() && tag.reverse.is_some() {
            return Err(Error::invalid_schema(
                "a field cannot declare both `rel(..)` and `reverse(..)`",
            ));
        }

        Ok(tag)
    }

    fn apply(&mut self, directive: &str) -> Result<()> {
        let (name, arg) = split_directive(directive)?;

        match (name, arg) {
            ("-", None) => self.skip = true,
            ("pk", None) => self.pk = true,
            ("auto", None) => self.auto = true,
            ("null", None) => self.null = true,
            ("unique", None) => self.unique = true,
            ("index", None) => self.index = true,
            ("auto_now", None) => self.auto_now = true,
            ("auto_now_add", None) => self.auto_now_add = true,
            ("size", Some(arg)) => self.size = Some(arg.parse()?),
            ("digits", Some(arg)) => self.digits = Some(arg.parse()?),
            ("decimals", Some(arg)) => self.decimals = Some(arg.parse()?),
            ("column", Some(arg)) => self.column = Some(arg.to_string()),
            ("default", Some(arg)) => self.default = Some(arg.to_string()),
            ("rel_table", Some(arg)) => self.rel_table = Some(arg.to_string()),
            ("type", Some(arg)) => {
                self.ty = Some(match arg {
                    "date" => TagType::Date,
                    "datetime" => TagType::DateTime,
                    "text" => TagType::Text,
                    _ => return Err(unknown_value("type", arg)),
                })
            }
            ("rel", Some(arg)) => {
                self.rel = Some(match arg {
                    "fk" => Rel::Fk,
                    "one" => Rel::One,
                    "m2m" => Rel::M2m,
                    _ => return Err(unknown_value("rel", arg)),
                })
            }
            ("reverse", Some(arg)) => {
                self.reverse = Some(match arg {
                    "one" => Reverse::One,
                    "many" => Reverse::Many,
                    _ => return Err(unknown_value("reverse", arg)),
                })
            }
            ("on_delete", Some(arg)) => {
                self.on_delete = Some(OnDeleteTag(match arg {
                    "cascade" => OnDelete::Cascade,
                    "set_null" => OnDelete::SetNull,
                    "set_default" => OnDelete::SetDefault,
                    "do_nothing" => OnDelete::DoNothing,
                    _ => return Err(unknown_value("on_delete", arg)),
                }))
            }
            (
                "-" | "pk" | "auto" | "null" | "unique" | "index" | "auto_now" | "auto_now_add",
                Some(_),
            ) => {
                return Err(Error::invalid_schema(format!(
                    "directive `{name}` takes no argument"
                )))
            }
            (
                "size" | "digits" | "decimals" | "column" | "default" | "rel_table" | "type"
                | "rel" | "reverse" | "on_delete",
                None,
            ) => {
                return Err(Error::invalid_schema(format!(
                    "directive `{name}` requires an argument"
                )))
            }
            _ => {
                return Err(Error::invalid_schema(format!(
                    "unknown directive `{name}`"
                )))
            }
        }

        Ok(())
    }
}

/// `name(arg)` -> `(name, Some(arg))`, `name` -> `(name, None)`.
fn split_directive(directive: &str) -> Result<(&str, Option<&str>)> {
    let Some((name, rest)) = directive.split_once('(') else {
        return Ok((directive, None));
    };

    let Some(arg) = rest.strip_suffix(')') else {
        return Err(Error::invalid_schema("unterminated argument list"));
    };

    Ok((name.trim(), Some(arg.trim())))
}

fn unknown_value(directive: &str, value: &str) -> Error {
    Error::invalid_schema(format!("`{value}` is not a valid value for `{directive}`"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std_util::prelude::*;

    #[test]
    fn empty_tag() {
        assert_eq!(assert_ok!(Tag::parse("")), Tag::default());
        assert_eq!(assert_ok!(Tag::parse(" ; ")), Tag::default());
    }

    #[test]
    fn flags_and_arguments() {
        let tag = assert_ok!(Tag::parse("size(30);unique"));
        assert_eq!(tag.size, Some(30));
        assert!(tag.unique);
        assert!(!tag.null);

        let tag = assert_ok!(Tag::parse("digits(8);decimals(4);null"));
        assert_eq!((tag.digits, tag.decimals), (Some(8), Some(4)));
        assert!(tag.null);

        let tag = assert_ok!(Tag::parse("auto_now_add;type(date)"));
        assert!(tag.auto_now_add);
        assert_eq!(tag.ty, Some(TagType::Date));
    }

    #[test]
    fn relations() {
        let tag = assert_ok!(Tag::parse("null;rel(one);on_delete(set_null)"));
        assert_eq!(tag.rel, Some(Rel::One));
        assert_eq!(tag.on_delete, Some(OnDeleteTag(OnDelete::SetNull)));

        let tag = assert_ok!(Tag::parse("reverse(many)"));
        assert_eq!(tag.reverse, Some(Reverse::Many));

        let tag = assert_ok!(Tag::parse("rel(m2m);rel_table(post_tag_links)"));
        assert_eq!(tag.rel, Some(Rel::M2m));
        assert_eq!(tag.rel_table.as_deref(), Some("post_tag_links"));
    }

    #[test]
    fn column_and_default_keep_their_text() {
        let tag = assert_ok!(Tag::parse("column(login); default(guest)"));
        assert_eq!(tag.column.as_deref(), Some("login"));
        assert_eq!(tag.default.as_deref(), Some("guest"));
    }

    #[test]
    fn skip() {
        assert!(assert_ok!(Tag::parse("-")).skip);
    }

    #[test]
    fn unknown_directive() {
        let err = assert_err!(Tag::parse("size(30);sise(40)"));
        assert!(err.is_invalid_schema());
        assert_eq!(
            err.to_string(),
            "in tag directive `sise(40)`: invalid schema: unknown directive `sise`"
        );
    }

    #[test]
    fn malformed_arguments() {
        let err = assert_err!(Tag::parse("size(thirty)"));
        assert!(err.to_string().contains("invalid digit"), "{err}");

        let err = assert_err!(Tag::parse("size(30"));
        assert!(err.to_string().contains("unterminated"), "{err}");

        let err = assert_err!(Tag::parse("rel(many)"));
        assert!(err.to_string().contains("`many` is not a valid value for `rel`"));

        assert_err!(Tag::parse("null(1)"));
        assert_err!(Tag::parse("size"));
    }

    #[test]
    fn rel_and_reverse_are_exclusive() {
        let err = assert_err!(Tag::parse("rel(fk);reverse(many)"));
        assert!(err.is_invalid_schema());
    }
}

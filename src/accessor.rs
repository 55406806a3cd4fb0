use std::borrow::Cow;
use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

type Read<T> = dyn for<'a> Fn(&'a T) -> Option<&'a str> + Send + Sync;

/// Reads a string field from an instance of `T`.
///
/// An accessor is a pure function plus a name. The name is used for rendering and translating a
/// predicate, and is what two accessors are compared by.
///
/// ```
/// use termfold::accessor::Accessor;
///
/// struct Person {
///     name: Option<String>,
/// }
///
/// let name = Accessor::new("name", |p: &Person| p.name.as_deref());
///
/// assert_eq!(name.read(&Person { name: Some("Ann".into()) }), Some("Ann"));
/// assert_eq!(name.read(&Person { name: None }), None);
/// ```
pub struct Accessor<T> {
    name: Cow<'static, str>,
    read: Arc<Read<T>>,
}

impl<T> Accessor<T> {
    pub fn new<F>(name: impl Into<Cow<'static, str>>, read: F) -> Self
    where
        F: for<'a> Fn(&'a T) -> Option<&'a str> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            read: Arc::new(read),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read the value, `None` if it is absent.
    pub fn read<'a>(&self, item: &'a T) -> Option<&'a str> {
        (self.read)(item)
    }
}

impl<T> Clone for Accessor<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            read: self.read.clone(),
        }
    }
}

impl<T> Debug for Accessor<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Accessor").field(&self.name).finish()
    }
}

impl<T> Display for Accessor<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

impl<T> PartialEq for Accessor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<T> Eq for Accessor<T> {}

#[cfg(feature = "serde")]
impl<T> serde::Serialize for Accessor<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.name)
    }
}

/// Types which can hand out accessors for their string fields.
///
/// This allows looking up fields by name at runtime, e.g. when the field names come from user
/// input. Usually implemented using `#[derive(Fields)]`.
pub trait Fields: Sized {
    fn fields() -> Vec<Accessor<Self>>;

    fn field(name: &str) -> Option<Accessor<Self>> {
        Self::fields()
            .into_iter()
            .find(|field| field.name() == name)
    }

    /// Look up several fields at once, failing on the first unknown name.
    fn fields_named<'n, I>(names: I) -> Result<Vec<Accessor<Self>>, UnknownField>
    where
        I: IntoIterator<Item = &'n str>,
    {
        let fields = Self::fields();
        names
            .into_iter()
            .map(|name| {
                fields
                    .iter()
                    .find(|field| field.name() == name)
                    .cloned()
                    .ok_or_else(|| UnknownField(name.to_string()))
            })
            .collect()
    }
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("Unknown field: {0}")]
pub struct UnknownField(pub String);

#[cfg(test)]
mod test {
    use super::*;

    struct Item {
        title: String,
        note: Option<String>,
    }

    impl Fields for Item {
        fn fields() -> Vec<Accessor<Self>> {
            vec![
                Accessor::new("title", |i: &Item| Some(i.title.as_str())),
                Accessor::new("note", |i: &Item| i.note.as_deref()),
            ]
        }
    }

    #[test]
    fn test_read() {
        let item = Item {
            title: "foo".into(),
            note: None,
        };

        let title = Item::field("title").unwrap();
        let note = Item::field("note").unwrap();

        assert_eq!(title.read(&item), Some("foo"));
        assert_eq!(note.read(&item), None);
        assert!(Item::field("other").is_none());
    }

    #[test]
    fn test_fields_named() {
        let fields = Item::fields_named(["note", "title"]).unwrap();
        assert_eq!(
            fields.iter().map(Accessor::name).collect::<Vec<_>>(),
            vec!["note", "title"]
        );

        assert_eq!(
            Item::fields_named(["title", "body"]).unwrap_err(),
            UnknownField("body".into())
        );
    }

    #[test]
    fn test_eq_by_name() {
        let a = Accessor::new("title", |i: &Item| Some(i.title.as_str()));
        let b = Accessor::new("title", |i: &Item| i.note.as_deref());

        assert_eq!(a, b);
        assert_eq!(format!("{a:?}"), r#"Accessor("title")"#);
        assert_eq!(a.to_string(), "title");
    }
}

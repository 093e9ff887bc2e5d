//! Attribute and entity model.
//!
//! An [`Entity`] is a named, ordered collection of [`Attribute`]s. Attributes
//! either carry a scalar value ([`Property`]) or point at another entity
//! through one of the three holder kinds. Entity references are [`EntityId`]s
//! into the arena that owns the entity, never direct links, so shared and
//! cyclic schemas need no special ownership.

use std::fmt;

/// A lightweight handle to an entity inside one arena.
///
/// Ids are only meaningful for the graph that issued them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct EntityId(u32);

impl EntityId {
    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Primitive type tag of a property.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
    Boolean,
    Int,
    Long,
    Float,
    Double,
    String,
    Date,
    Time,
    DateTime,
    Duration,
    /// Any other scalar, rendered verbatim (e.g. a user enum).
    Custom(String),
}

impl ValueType {
    /// Type token used in generated records.
    pub fn token(&self) -> &str {
        match self {
            Self::Boolean => "Boolean",
            Self::Int => "Int",
            Self::Long => "Long",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::String => "String",
            Self::Date => "Date",
            Self::Time => "Time",
            Self::DateTime => "DateTime",
            Self::Duration => "Duration",
            Self::Custom(name) => name,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Cardinality of an entity reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Multiplicity {
    One,
    OneOrZero,
    Many,
}

/// Direction of a relationship, seen from the entity declaring the attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Incoming,
    Outgoing,
}

impl Direction {
    /// Pattern text opening the relationship bracket: `-[` or `<-[`.
    pub fn arrow_start(self) -> &'static str {
        match self {
            Self::Incoming => "<-[",
            Self::Outgoing => "-[",
        }
    }

    /// Pattern text closing the relationship bracket: `]->` or `]-`.
    pub fn arrow_end(self) -> &'static str {
        match self {
            Self::Incoming => "]-",
            Self::Outgoing => "]->",
        }
    }
}

/// Which end of a relationship an endpoint attribute names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Start,
    End,
}

/// Scalar attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub value_type: ValueType,
    pub nullable: bool,
}

impl Property {
    pub fn new(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            value_type,
            nullable: false,
        }
    }

    pub fn nullable(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            nullable: true,
            ..Self::new(name, value_type)
        }
    }
}

/// A node reached from a node over a typed relationship.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeViaRelationship {
    pub name: String,
    pub relationship_type: String,
    pub multiplicity: Multiplicity,
    pub direction: Direction,
    pub node: EntityId,
}

/// A relationship entity attached to a node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelationshipHolder {
    pub name: String,
    pub relationship_type: String,
    pub multiplicity: Multiplicity,
    pub direction: Direction,
    pub relationship: EntityId,
}

/// The start or end node of a relationship entity. Always exactly one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointOfRelationship {
    pub name: String,
    pub role: Role,
    pub node: EntityId,
}

/// One named feature of an entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Attribute {
    Property(Property),
    Node(NodeViaRelationship),
    Relationship(RelationshipHolder),
    Endpoint(EndpointOfRelationship),
}

impl Attribute {
    pub fn name(&self) -> &str {
        match self {
            Self::Property(p) => &p.name,
            Self::Node(n) => &n.name,
            Self::Relationship(r) => &r.name,
            Self::Endpoint(e) => &e.name,
        }
    }

    /// Whether this attribute references another entity.
    pub fn is_holder(&self) -> bool {
        !matches!(self, Self::Property(_))
    }

    /// Referenced entity, `None` for properties.
    pub fn target(&self) -> Option<EntityId> {
        match self {
            Self::Property(_) => None,
            Self::Node(n) => Some(n.node),
            Self::Relationship(r) => Some(r.relationship),
            Self::Endpoint(e) => Some(e.node),
        }
    }

    pub fn target_mut(&mut self) -> Option<&mut EntityId> {
        match self {
            Self::Property(_) => None,
            Self::Node(n) => Some(&mut n.node),
            Self::Relationship(r) => Some(&mut r.relationship),
            Self::Endpoint(e) => Some(&mut e.node),
        }
    }

    /// Cardinality of the reference, `None` for properties.
    pub fn multiplicity(&self) -> Option<Multiplicity> {
        match self {
            Self::Property(_) => None,
            Self::Node(n) => Some(n.multiplicity),
            Self::Relationship(r) => Some(r.multiplicity),
            Self::Endpoint(_) => Some(Multiplicity::One),
        }
    }

    /// Record type this attribute has in generated code.
    pub fn type_expr(&self) -> TypeExpr {
        match self {
            Self::Property(p) => {
                let ty = TypeExpr::Primitive(p.value_type.clone());
                if p.nullable {
                    TypeExpr::Optional(Box::new(ty))
                } else {
                    ty
                }
            }
            Self::Node(n) => TypeExpr::Entity(n.node).with_multiplicity(n.multiplicity),
            Self::Relationship(r) => {
                TypeExpr::Entity(r.relationship).with_multiplicity(r.multiplicity)
            }
            Self::Endpoint(e) => TypeExpr::Entity(e.node),
        }
    }
}

/// Type of a generated record field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeExpr {
    Primitive(ValueType),
    Optional(Box<TypeExpr>),
    List(Box<TypeExpr>),
    /// The record generated for an entity.
    Entity(EntityId),
}

impl TypeExpr {
    pub fn with_multiplicity(self, multiplicity: Multiplicity) -> Self {
        match multiplicity {
            Multiplicity::One => self,
            Multiplicity::OneOrZero => Self::Optional(Box::new(self)),
            Multiplicity::Many => Self::List(Box::new(self)),
        }
    }

    /// Innermost entity reference, if any.
    pub fn entity(&self) -> Option<EntityId> {
        match self {
            Self::Primitive(_) => None,
            Self::Optional(inner) | Self::List(inner) => inner.entity(),
            Self::Entity(id) => Some(*id),
        }
    }

    /// Format as `T`, `T?` or `List<T>`, naming entity records via `resolve`.
    pub fn render<'n>(&self, resolve: &dyn Fn(EntityId) -> &'n str) -> String {
        match self {
            Self::Primitive(ty) => ty.token().to_string(),
            Self::Optional(inner) => format!("{}?", inner.render(resolve)),
            Self::List(inner) => format!("List<{}>", inner.render(resolve)),
            Self::Entity(id) => resolve(*id).to_string(),
        }
    }
}

/// A named schema concept: a node type or a relationship type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entity {
    name: String,
    attributes: Vec<Attribute>,
}

impl Entity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    /// Identity key used by merge.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All attributes in declaration order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut [Attribute] {
        &mut self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name() == name)
    }

    pub fn properties(&self) -> impl Iterator<Item = &Property> {
        self.attributes.iter().filter_map(|a| match a {
            Attribute::Property(p) => Some(p),
            _ => None,
        })
    }

    /// Attributes referencing other entities, in declaration order.
    pub fn holders(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter().filter(|a| a.is_holder())
    }

    pub fn push(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }
}

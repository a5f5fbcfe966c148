//! Field-level change notification for entities mutated after generation.
//!
//! Generated entities are plain records. A consumer that wants to observe
//! edits wraps one in [`Observed`], subscribes per field, and mutates through
//! the wrapper. Mutators name the field they touch explicitly.

use std::fmt;
use std::ops::Deref;

use crate::person::{Address, Gender, Human};

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback<T> = Box<dyn FnMut(&T, &str)>;

enum Topic {
    Field(&'static str),
    All,
}

impl Topic {
    fn matches(&self, field: &str) -> bool {
        match self {
            Topic::Field(name) => *name == field,
            Topic::All => true,
        }
    }
}

struct Subscriber<T> {
    id: SubscriptionId,
    topic: Topic,
    callback: Callback<T>,
}

/// Ordered list of field subscribers for one entity.
pub struct ChangeNotifier<T> {
    subscribers: Vec<Subscriber<T>>,
    next_id: u64,
}

impl<T> Default for ChangeNotifier<T> {
    fn default() -> Self {
        Self {
            subscribers: Vec::new(),
            next_id: 1,
        }
    }
}

impl<T> fmt::Debug for ChangeNotifier<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl<T> ChangeNotifier<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(
        &mut self,
        field: &'static str,
        callback: impl FnMut(&T, &str) + 'static,
    ) -> SubscriptionId {
        self.push(Topic::Field(field), Box::new(callback))
    }

    /// Subscribe to every field of the entity.
    pub fn subscribe_all(&mut self, callback: impl FnMut(&T, &str) + 'static) -> SubscriptionId {
        self.push(Topic::All, Box::new(callback))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|subscriber| subscriber.id != id);
        self.subscribers.len() != before
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// Invoke every subscriber of `field`, in subscription order.
    pub fn notify(&mut self, entity: &T, field: &str) {
        for subscriber in &mut self.subscribers {
            if subscriber.topic.matches(field) {
                (subscriber.callback)(entity, field);
            }
        }
    }

    fn push(&mut self, topic: Topic, callback: Callback<T>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push(Subscriber {
            id,
            topic,
            callback,
        });
        id
    }
}

/// An entity paired with its change notifier.
///
/// Reads go through `Deref`; writes go through [`Observed::set`] or the typed
/// setters so that subscribers see every committed change.
#[derive(Debug, Default)]
pub struct Observed<T> {
    entity: T,
    notifier: ChangeNotifier<T>,
}

impl<T> Observed<T> {
    pub fn new(entity: T) -> Self {
        Self {
            entity,
            notifier: ChangeNotifier::new(),
        }
    }

    pub fn get(&self) -> &T {
        &self.entity
    }

    pub fn into_inner(self) -> T {
        self.entity
    }

    pub fn subscribe(
        &mut self,
        field: &'static str,
        callback: impl FnMut(&T, &str) + 'static,
    ) -> SubscriptionId {
        self.notifier.subscribe(field, callback)
    }

    pub fn subscribe_all(&mut self, callback: impl FnMut(&T, &str) + 'static) -> SubscriptionId {
        self.notifier.subscribe_all(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Commit `value` into the field chosen by `select` and notify.
    ///
    /// Returns `false` without notifying when the field already holds an
    /// equal value.
    pub fn set<V: PartialEq>(
        &mut self,
        field: &'static str,
        select: impl FnOnce(&mut T) -> &mut V,
        value: V,
    ) -> bool {
        let slot = select(&mut self.entity);
        if *slot == value {
            return false;
        }
        *slot = value;
        self.notifier.notify(&self.entity, field);
        true
    }
}

impl<T> Deref for Observed<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.entity
    }
}

impl<T> From<T> for Observed<T> {
    fn from(entity: T) -> Self {
        Self::new(entity)
    }
}

impl Observed<Human> {
    pub fn set_first_name(&mut self, value: impl Into<String>) -> bool {
        self.set("first_name", |h| &mut h.first_name, value.into())
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) -> bool {
        self.set("last_name", |h| &mut h.last_name, value.into())
    }

    pub fn set_email(&mut self, value: impl Into<String>) -> bool {
        self.set("email", |h| &mut h.email, value.into())
    }

    pub fn set_gender(&mut self, value: Gender) -> bool {
        self.set("gender", |h| &mut h.gender, value)
    }

    pub fn set_birth_date(&mut self, value: chrono::NaiveDate) -> bool {
        self.set("birth_date", |h| &mut h.birth_date, value)
    }

    pub fn set_national_id(&mut self, value: impl Into<String>) -> bool {
        self.set("national_id", |h| &mut h.national_id, value.into())
    }

    pub fn set_address(&mut self, value: Address) -> bool {
        self.set("address", |h| &mut h.address, value)
    }
}

impl Observed<Address> {
    pub fn set_street(&mut self, value: impl Into<String>) -> bool {
        self.set("street", |a| &mut a.street, value.into())
    }

    pub fn set_city(&mut self, value: impl Into<String>) -> bool {
        self.set("city", |a| &mut a.city, value.into())
    }

    pub fn set_state(&mut self, value: impl Into<String>) -> bool {
        self.set("state", |a| &mut a.state, value.into())
    }

    pub fn set_postal_code(&mut self, value: impl Into<String>) -> bool {
        self.set("postal_code", |a| &mut a.postal_code, value.into())
    }

    pub fn set_country(&mut self, value: impl Into<String>) -> bool {
        self.set("country", |a| &mut a.country, value.into())
    }
}

//! Core observables as Leptos triggers.

use leptos::*;
use std::rc::Rc;

use vendorhub::Observable;

/// Subscribe to an observable owned by `owner` for the lifetime of the
/// current reactive scope. Track the returned trigger inside a view closure
/// to re-render on every change.
pub fn watch<O: 'static, T: 'static>(owner: &Rc<O>, field: fn(&O) -> &Observable<T>) -> Trigger {
    let trigger = create_trigger();
    let id = field(owner).subscribe(move || trigger.notify());

    let owner = Rc::clone(owner);
    on_cleanup(move || field(&owner).unsubscribe(id));

    trigger
}

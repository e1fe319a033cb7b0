//! # Notification contract declaration.
//!
//! [`observer_contract!`](crate::observer_contract) turns a list of payload
//! types into a single observer capability trait. The list fixes, per type,
//! the convention the registry will use to deliver it:
//!
//! ```text
//! observer_contract! {
//!     pub trait SensorObserver {
//!         TemperatureSample,        // by value          ──► Observe<T>
//!         &mut CalibrationCommand,  // by mutable ref    ──► ObserveMut<T>
//!         &FaultCode,               // by shared ref     ──► ObserveRef<T>
//!     }
//! }
//! ```
//!
//! The macro expands to a trait whose supertraits are the matching handler
//! traits, plus a blanket impl, so any type providing the full handler set
//! is an implementer — and a type missing even one handler is not. The
//! contract has no runtime representation.
//!
//! ## Rules
//! - **1 to 8 payload types** per contract. Nine or more is a compile-time
//!   error; this is a fixed ceiling, not a configuration knob.
//! - **Distinct types only**: declaring the same payload type twice produces
//!   conflicting-impl errors at compile time.
//! - The emitted trait is dyn-compatible, so a registry can hold
//!   heterogeneous observers as `&dyn Contract`.
//!
//! ## Capacity ceiling
//! ```compile_fail
//! # use notifan::observer_contract;
//! # #[derive(Clone)] struct E1; #[derive(Clone)] struct E2;
//! # #[derive(Clone)] struct E3; #[derive(Clone)] struct E4;
//! # #[derive(Clone)] struct E5; #[derive(Clone)] struct E6;
//! # #[derive(Clone)] struct E7; #[derive(Clone)] struct E8;
//! # #[derive(Clone)] struct E9;
//! observer_contract! {
//!     pub trait TooWide {
//!         E1, E2, E3, E4, E5, E6, E7, E8, E9,
//!     }
//! }
//! ```
//!
//! ## Distinctness
//! ```compile_fail
//! # use notifan::observer_contract;
//! # #[derive(Clone)] struct Tick;
//! observer_contract! {
//!     pub trait Doubled {
//!         Tick,
//!         &Tick,
//!     }
//! }
//! ```

/// Declares an observer capability trait over 1..=8 notification types.
///
/// Each entry is spelled in type syntax and picks the delivery convention:
/// `T` for by value ([`Observe<T>`](crate::Observe)), `&mut T` for by
/// mutable reference ([`ObserveMut<T>`](crate::ObserveMut)), `&T` for by
/// shared reference ([`ObserveRef<T>`](crate::ObserveRef)).
///
/// # Example
/// ```rust
/// use notifan::{observer_contract, Observe, ObserveMut};
///
/// #[derive(Clone)]
/// struct Tick(u32);
/// struct Adjust(i32);
///
/// observer_contract! {
///     /// Observers driven by the scheduler.
///     pub trait ClockObserver {
///         Tick,
///         &mut Adjust,
///     }
/// }
///
/// struct Counter;
///
/// impl Observe<Tick> for Counter {
///     fn on_event(&self, _event: Tick) {}
/// }
///
/// impl ObserveMut<Adjust> for Counter {
///     fn on_event_mut(&self, event: &mut Adjust) {
///         event.0 = 0;
///     }
/// }
///
/// fn takes_observer(_: &dyn ClockObserver) {}
/// takes_observer(&Counter);
/// ```
#[macro_export]
macro_rules! observer_contract {
    (
        $(#[$meta:meta])*
        $vis:vis trait $name:ident {
            $($body:tt)+
        }
    ) => {
        $crate::__observer_contract! {
            @munch
            meta [$(#[$meta])*]
            vis [$vis]
            name [$name]
            bounds []
            types []
            rest [$($body)+]
        }
    };
}

/// Internal expansion worker for [`observer_contract!`]. Not public API.
#[doc(hidden)]
#[macro_export]
macro_rules! __observer_contract {
    // Entry delivered by mutable reference.
    (@munch
        meta [$($meta:tt)*]
        vis [$vis:vis]
        name [$name:ident]
        bounds [$($bound:tt)*]
        types [$($seen:ty,)*]
        rest [&mut $ty:ty $(, $($rest:tt)*)?]
    ) => {
        $crate::__observer_contract! {
            @munch
            meta [$($meta)*]
            vis [$vis]
            name [$name]
            bounds [$($bound)* $crate::ObserveMut<$ty> +]
            types [$($seen,)* $ty,]
            rest [$($($rest)*)?]
        }
    };

    // Entry delivered by shared reference.
    (@munch
        meta [$($meta:tt)*]
        vis [$vis:vis]
        name [$name:ident]
        bounds [$($bound:tt)*]
        types [$($seen:ty,)*]
        rest [& $ty:ty $(, $($rest:tt)*)?]
    ) => {
        $crate::__observer_contract! {
            @munch
            meta [$($meta)*]
            vis [$vis]
            name [$name]
            bounds [$($bound)* $crate::ObserveRef<$ty> +]
            types [$($seen,)* $ty,]
            rest [$($($rest)*)?]
        }
    };

    // Entry delivered by value.
    (@munch
        meta [$($meta:tt)*]
        vis [$vis:vis]
        name [$name:ident]
        bounds [$($bound:tt)*]
        types [$($seen:ty,)*]
        rest [$ty:ty $(, $($rest:tt)*)?]
    ) => {
        $crate::__observer_contract! {
            @munch
            meta [$($meta)*]
            vis [$vis]
            name [$name]
            bounds [$($bound)* $crate::Observe<$ty> +]
            types [$($seen,)* $ty,]
            rest [$($($rest)*)?]
        }
    };

    // All entries consumed: emit the trait, the blanket impl, and the
    // compile-time arity/distinctness checks.
    (@munch
        meta [$($meta:tt)*]
        vis [$vis:vis]
        name [$name:ident]
        bounds [$($bound:tt)*]
        types [$($seen:ty,)*]
        rest []
    ) => {
        $($meta)*
        $vis trait $name: $($bound)* {}

        impl<__O> $name for __O where __O: $($bound)* {}

        const _: () = {
            // One marker impl per declared payload type: a duplicate type
            // collapses two impls into one and fails with E0119.
            trait __DeclaredOnce<__E> {}
            enum __Witness {}
            $(impl __DeclaredOnce<$seen> for __Witness {})*

            ::core::assert!(
                [$(::core::stringify!($seen)),*].len() <= 8,
                "observer contracts support at most 8 notification types"
            );
        };
    };
}

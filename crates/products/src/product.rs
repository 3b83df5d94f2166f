//! The polymorphic product capability.

/// A product that can be stocked.
///
/// Implementors are concrete product kinds (food, furniture, ...). The stock
/// container only ever talks to them through this trait.
pub trait Product: core::fmt::Debug {
    /// Deep copy into a new, independently owned value of the same concrete
    /// type and state.
    fn clone_product(&self) -> Box<dyn Product>;

    /// Unit price. Must be stable between calls.
    fn price(&self) -> f64;

    /// Volume needed to store one unit. Must be stable between calls.
    fn storage_volume(&self) -> f64;

    /// Display name, used in diagnostics only.
    fn name(&self) -> &str {
        "product"
    }
}

impl Clone for Box<dyn Product> {
    fn clone(&self) -> Self {
        self.clone_product()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Crate {
        label: String,
        price: f64,
        volume: f64,
    }

    impl Product for Crate {
        fn clone_product(&self) -> Box<dyn Product> {
            Box::new(self.clone())
        }

        fn price(&self) -> f64 {
            self.price
        }

        fn storage_volume(&self) -> f64 {
            self.volume
        }

        fn name(&self) -> &str {
            &self.label
        }
    }

    #[test]
    fn boxed_clone_preserves_state() {
        let original: Box<dyn Product> = Box::new(Crate {
            label: "apples".to_string(),
            price: 3.5,
            volume: 1.0,
        });

        let copy = original.clone();

        assert_eq!(copy.name(), "apples");
        assert_eq!(copy.price(), 3.5);
        assert_eq!(copy.storage_volume(), 1.0);
    }

    #[test]
    fn boxed_clone_is_a_separate_allocation() {
        let original: Box<dyn Product> = Box::new(Crate {
            label: "pears".to_string(),
            price: 2.0,
            volume: 4.0,
        });

        let copy = original.clone();

        assert!(!core::ptr::addr_eq(&*original, &*copy));
    }

    #[test]
    fn default_name_is_generic() {
        #[derive(Debug)]
        struct Unnamed;

        impl Product for Unnamed {
            fn clone_product(&self) -> Box<dyn Product> {
                Box::new(Unnamed)
            }

            fn price(&self) -> f64 {
                0.0
            }

            fn storage_volume(&self) -> f64 {
                0.0
            }
        }

        assert_eq!(Unnamed.name(), "product");
    }
}

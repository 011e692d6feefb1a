//! Plugins installed into the app before the first render

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::rc::Rc;

use yew::prelude::*;

pub mod chart;

/// Capability installed once at mount time
pub trait Plugin {
    fn name(&self) -> &'static str;

    /// Register values for components to pick up with [`use_extension`]
    fn install(&self, app: &mut Installer);
}

/// Collects values provided by plugins
#[derive(Default)]
pub struct Installer {
    values: HashMap<TypeId, Rc<dyn Any>>,
}

impl Installer {
    /// Provide value of type `T`. Returns `true` if it replaced an earlier one.
    pub fn provide<T: 'static>(&mut self, value: T) -> bool {
        self.values
            .insert(TypeId::of::<T>(), Rc::new(value))
            .is_some()
    }

    pub fn finish(self) -> Extensions {
        Extensions(Rc::new(self.values))
    }
}

/// Read-only values provided by plugins, shared through context
#[derive(Clone, Default)]
pub struct Extensions(Rc<HashMap<TypeId, Rc<dyn Any>>>);

impl Extensions {
    pub fn get<T: 'static>(&self) -> Option<Rc<T>> {
        let value = self.0.get(&TypeId::of::<T>())?.clone();
        value.downcast().ok()
    }
}

impl PartialEq for Extensions {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Get value installed by a plugin
#[hook]
pub fn use_extension<T: 'static>() -> Option<Rc<T>> {
    use_context::<Extensions>()
        .and_then(|ext| ext.get::<T>())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter(u32);

    struct CounterPlugin;

    impl Plugin for CounterPlugin {
        fn name(&self) -> &'static str {
            "counter"
        }

        fn install(&self, app: &mut Installer) {
            app.provide(Counter(7));
        }
    }

    #[test]
    fn test_install_and_get() {
        let mut installer = Installer::default();
        CounterPlugin.install(&mut installer);
        assert!(installer.provide(Counter(8)));

        let ext = installer.finish();
        assert_eq!(ext.get::<Counter>().map(|c| c.0), Some(8));
        assert!(ext.get::<String>().is_none());
    }

    #[test]
    fn test_extensions_eq_by_identity() {
        let ext = Installer::default().finish();
        assert!(ext == ext.clone());
        assert!(ext != Installer::default().finish());
    }
}

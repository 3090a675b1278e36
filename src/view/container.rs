//! Visibility handles for the two view containers.

/// Something whose visibility the view controller toggles.
pub trait Container {
    fn set_visible(&mut self, visible: bool);
    fn is_visible(&self) -> bool;
}

/// A named panel shown or hidden by the GUI each frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    name: &'static str,
    visible: bool,
}

impl Panel {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            visible: false,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Container for Panel {
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}

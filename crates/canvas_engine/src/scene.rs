//! Ordered element collection bound to one surface
//!
//! Insertion order is update order, render order and stacking order. Removing an element
//! destroys its primitive and drops it, so a removed element can never be rendered again.

use crate::element::{Element, Frame, Sprite, Text};
use crate::assets::ImageData;
use crate::foundation::any::AsAny;
use crate::surface::{Surface, SurfaceError};
use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Identifier of an element inside a [`Scene`]
    pub struct ElementId;
}

/// The surface plus the elements drawn on it
pub struct Scene {
    surface: Box<dyn Surface>,
    elements: SlotMap<ElementId, Box<dyn Element>>,
    order: Vec<ElementId>,
    stop_requested: bool,
}

impl Scene {
    /// Wrap a surface with an empty element list
    pub fn new(surface: Box<dyn Surface>) -> Self {
        Self {
            surface,
            elements: SlotMap::with_key(),
            order: Vec::new(),
            stop_requested: false,
        }
    }

    /// The rendering surface
    pub fn surface(&self) -> &dyn Surface {
        self.surface.as_ref()
    }

    /// Mutable rendering surface, for constructing elements
    pub fn surface_mut(&mut self) -> &mut dyn Surface {
        self.surface.as_mut()
    }

    /// Build a [`Text`] on this scene's surface (not yet added)
    pub fn create_text(&mut self, text: impl Into<String>, x: f32, y: f32) -> Result<Text, SurfaceError> {
        Text::new(self.surface.as_mut(), text, x, y)
    }

    /// Build a [`Sprite`] on this scene's surface (not yet added)
    pub fn create_sprite(&mut self, image: ImageData, x: f32, y: f32) -> Result<Sprite, SurfaceError> {
        Sprite::new(self.surface.as_mut(), image, x, y)
    }

    /// Append an element and run its `init_element` hook
    ///
    /// The element must have been built on this scene's surface; one built elsewhere is
    /// rejected with [`SurfaceError::ForeignHandle`] and dropped.
    pub fn add_element<E: Element>(&mut self, element: E) -> Result<ElementId, SurfaceError> {
        self.add_boxed(Box::new(element))
    }

    /// Append an already boxed element
    pub fn add_boxed(&mut self, mut element: Box<dyn Element>) -> Result<ElementId, SurfaceError> {
        let handle = element.state().handle();
        if !self.surface.owns(handle) {
            log::warn!("Rejected element whose handle {:?} is not on this surface", handle);
            return Err(SurfaceError::ForeignHandle(handle));
        }

        if !element.state().initialized {
            element.init_element(self.surface.as_mut());
            element.state_mut().initialized = true;
        }

        let id = self.elements.insert(element);
        self.order.push(id);
        log::debug!("Added element {:?} ({} total)", id, self.order.len());
        Ok(id)
    }

    /// Remove an element and destroy its primitive
    ///
    /// Returns `false`, and does nothing else, if the element is not in the scene.
    pub fn remove_element(&mut self, id: ElementId) -> bool {
        let Some(element) = self.elements.remove(id) else {
            log::trace!("Remove of unknown element {:?} ignored", id);
            return false;
        };

        if let Some(index) = self.order.iter().position(|other| *other == id) {
            self.order.remove(index);
        }
        self.surface.destroy(element.state().handle());
        log::debug!("Removed element {:?} ({} left)", id, self.order.len());
        true
    }

    /// Whether the element is in the scene
    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(id)
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the scene has no elements
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Element ids in update order
    pub fn ids(&self) -> &[ElementId] {
        &self.order
    }

    /// Borrow an element without knowing its type
    pub fn get(&self, id: ElementId) -> Option<&dyn Element> {
        self.elements.get(id).map(|element| &**element)
    }

    /// Borrow an element as its concrete type
    pub fn element<T: Element>(&self, id: ElementId) -> Option<&T> {
        let element: &dyn Element = &**self.elements.get(id)?;
        element.as_any().downcast_ref::<T>()
    }

    /// Mutably borrow an element as its concrete type
    pub fn element_mut<T: Element>(&mut self, id: ElementId) -> Option<&mut T> {
        let element: &mut dyn Element = &mut **self.elements.get_mut(id)?;
        element.as_any_mut().downcast_mut::<T>()
    }

    /// Run `f` on a typed element together with the surface
    ///
    /// ```rust,no_run
    /// # use canvas_engine::prelude::*;
    /// # fn bump(scene: &mut Scene, score: ElementId) {
    /// scene.with_element(score, |label: &mut Text, surface| label.set_text(surface, "Score: 1"));
    /// # }
    /// ```
    pub fn with_element<T: Element, R>(
        &mut self,
        id: ElementId,
        f: impl FnOnce(&mut T, &mut dyn Surface) -> R,
    ) -> Option<R> {
        let element: &mut dyn Element = &mut **self.elements.get_mut(id)?;
        let typed = element.as_any_mut().downcast_mut::<T>()?;
        Some(f(typed, self.surface.as_mut()))
    }

    /// Show an element. Returns `false` if it is not in the scene.
    pub fn show(&mut self, id: ElementId) -> bool {
        match self.elements.get_mut(id) {
            Some(element) => {
                element.show(self.surface.as_mut());
                true
            }
            None => false,
        }
    }

    /// Hide an element. Returns `false` if it is not in the scene.
    pub fn hide(&mut self, id: ElementId) -> bool {
        match self.elements.get_mut(id) {
            Some(element) => {
                element.hide(self.surface.as_mut());
                true
            }
            None => false,
        }
    }

    /// Ask the owning application to stop after the current callback
    pub fn request_stop(&mut self) {
        self.stop_requested = true;
    }

    /// Whether a stop was requested
    pub fn stop_requested(&self) -> bool {
        self.stop_requested
    }

    pub(crate) fn take_stop_request(&mut self) -> bool {
        std::mem::take(&mut self.stop_requested)
    }

    /// Update then render every element, in insertion order
    pub(crate) fn update_and_render(&mut self, frame: &Frame) {
        for id in &self.order {
            if let Some(element) = self.elements.get_mut(*id) {
                element.update(frame);
                element.render(self.surface.as_mut());
            }
        }
    }
}

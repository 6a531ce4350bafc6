//! Headless surface that keeps every primitive in memory

use super::{ItemKey, Surface, SurfaceError, SurfaceHandle, SurfaceId};
use crate::assets::ImageData;
use crate::foundation::math::Point2;
use slotmap::SlotMap;

/// What a primitive draws
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    /// A text label
    Text(String),
    /// An image of the given pixel size
    Image {
        /// Width in pixels
        width: u32,
        /// Height in pixels
        height: u32,
    },
}

/// One primitive on a [`MemorySurface`]
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Payload
    pub kind: ItemKind,
    /// Center position
    pub position: Point2,
    /// Display state
    pub visible: bool,
    /// How many times the position was written
    pub moves: u64,
}

/// In-memory [`Surface`] used by the headless host and by tests
#[derive(Debug)]
pub struct MemorySurface {
    id: SurfaceId,
    width: u32,
    height: u32,
    items: SlotMap<ItemKey, Item>,
    stack: Vec<SurfaceHandle>,
}

impl MemorySurface {
    /// Create an empty surface
    pub fn new(width: u32, height: u32) -> Self {
        log::debug!("Creating {}x{} memory surface", width, height);
        Self {
            id: SurfaceId::fresh(),
            width,
            height,
            items: SlotMap::with_key(),
            stack: Vec::new(),
        }
    }

    /// Look up a primitive
    pub fn item(&self, handle: SurfaceHandle) -> Option<&Item> {
        self.key(handle).and_then(|key| self.items.get(key))
    }

    /// Handles in stacking order, bottom first
    pub fn stacking_order(&self) -> &[SurfaceHandle] {
        &self.stack
    }

    fn key(&self, handle: SurfaceHandle) -> Option<ItemKey> {
        self.owns(handle).then_some(handle.key())
    }

    fn insert(&mut self, kind: ItemKind, position: Point2) -> SurfaceHandle {
        let key = self.items.insert(Item { kind, position, visible: true, moves: 0 });
        let handle = SurfaceHandle::new(self.id, key);
        self.stack.push(handle);
        handle
    }

    fn item_mut(&mut self, handle: SurfaceHandle, op: &str) -> Option<&mut Item> {
        if !self.owns(handle) {
            log::warn!("{} on handle {:?} from another surface", op, handle);
            return None;
        }
        let item = self.items.get_mut(handle.key());
        if item.is_none() {
            log::warn!("{} on stale surface handle {:?}", op, handle);
        }
        item
    }

    /// Draw the visible primitives into a `cols` x `rows` character grid
    ///
    /// Images become a `#`, text is written centered on its position. Later primitives
    /// overwrite earlier ones, matching the canvas stacking order.
    pub fn render_ascii(&self, cols: usize, rows: usize) -> String {
        let mut grid = vec![vec![' '; cols]; rows];
        if cols == 0 || rows == 0 {
            return String::new();
        }

        let cell = |position: &Point2| -> (i64, i64) {
            let col = (f64::from(position.x) / f64::from(self.width.max(1)) * cols as f64).floor() as i64;
            let row = (f64::from(position.y) / f64::from(self.height.max(1)) * rows as f64).floor() as i64;
            (col, row)
        };

        for handle in &self.stack {
            let Some(item) = self.items.get(handle.key()) else { continue };
            if !item.visible {
                continue;
            }
            let (col, row) = cell(&item.position);
            if row < 0 || row >= rows as i64 {
                continue;
            }
            let glyphs: Vec<char> = match &item.kind {
                ItemKind::Text(text) => text.chars().collect(),
                ItemKind::Image { .. } => vec!['#'],
            };
            let start = col - (glyphs.len() as i64) / 2;
            for (offset, glyph) in glyphs.into_iter().enumerate() {
                let x = start + offset as i64;
                if x >= 0 && x < cols as i64 {
                    grid[row as usize][x as usize] = glyph;
                }
            }
        }

        grid.into_iter()
            .map(|line| line.into_iter().collect::<String>().trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Surface for MemorySurface {
    fn id(&self) -> SurfaceId {
        self.id
    }

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn create_text(&mut self, position: Point2, text: &str) -> Result<SurfaceHandle, SurfaceError> {
        let handle = self.insert(ItemKind::Text(text.to_string()), position);
        log::trace!("Created text {:?} at ({}, {})", handle, position.x, position.y);
        Ok(handle)
    }

    fn create_image(&mut self, position: Point2, image: &ImageData) -> Result<SurfaceHandle, SurfaceError> {
        image.validate()?;
        let handle = self.insert(
            ItemKind::Image { width: image.width, height: image.height },
            position,
        );
        log::trace!("Created image {:?} at ({}, {})", handle, position.x, position.y);
        Ok(handle)
    }

    fn set_position(&mut self, handle: SurfaceHandle, position: Point2) {
        if let Some(item) = self.item_mut(handle, "set_position") {
            item.position = position;
            item.moves += 1;
        }
    }

    fn set_visible(&mut self, handle: SurfaceHandle, visible: bool) {
        if let Some(item) = self.item_mut(handle, "set_visible") {
            item.visible = visible;
        }
    }

    fn set_text(&mut self, handle: SurfaceHandle, text: &str) {
        if let Some(item) = self.item_mut(handle, "set_text") {
            match &mut item.kind {
                ItemKind::Text(current) => *current = text.to_string(),
                ItemKind::Image { .. } => log::warn!("set_text on image primitive {:?}", handle),
            }
        }
    }

    fn destroy(&mut self, handle: SurfaceHandle) -> bool {
        let Some(key) = self.key(handle) else {
            log::warn!("destroy on handle {:?} from another surface", handle);
            return false;
        };
        if self.items.remove(key).is_some() {
            self.stack.retain(|h| *h != handle);
            log::trace!("Destroyed {:?}", handle);
            true
        } else {
            false
        }
    }

    fn coords(&self, handle: SurfaceHandle) -> Option<Point2> {
        self.item(handle).map(|item| item.position)
    }

    fn is_shown(&self, handle: SurfaceHandle) -> Option<bool> {
        self.item(handle).map(|item| item.visible)
    }

    fn text(&self, handle: SurfaceHandle) -> Option<&str> {
        match &self.item(handle)?.kind {
            ItemKind::Text(text) => Some(text.as_str()),
            ItemKind::Image { .. } => None,
        }
    }

    fn item_count(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_move_text() {
        let mut surface = MemorySurface::new(800, 500);
        let handle = surface.create_text(Point2::new(10.0, 20.0), "hi").unwrap();
        surface.set_position(handle, Point2::new(30.0, 40.0));
        assert_eq!(surface.coords(handle), Some(Point2::new(30.0, 40.0)));
        assert_eq!(surface.text(handle), Some("hi"));
        assert_eq!(surface.item(handle).unwrap().moves, 1);
    }

    #[test]
    fn test_destroy_invalidates_handle() {
        let mut surface = MemorySurface::new(800, 500);
        let handle = surface.create_text(Point2::new(0.0, 0.0), "gone").unwrap();
        assert!(surface.destroy(handle));
        assert!(!surface.destroy(handle));
        assert_eq!(surface.coords(handle), None);
        assert_eq!(surface.item_count(), 0);
        assert!(surface.stacking_order().is_empty());

        // Stale handles are ignored, and do not alias newer items.
        let fresh = surface.create_text(Point2::new(1.0, 1.0), "new").unwrap();
        surface.set_position(handle, Point2::new(99.0, 99.0));
        assert_eq!(surface.coords(fresh), Some(Point2::new(1.0, 1.0)));
    }

    #[test]
    fn test_handles_from_another_surface_are_ignored() {
        let mut mine = MemorySurface::new(800, 500);
        let mut other = MemorySurface::new(800, 500);
        let own = mine.create_text(Point2::new(1.0, 1.0), "mine").unwrap();
        let foreign = other.create_text(Point2::new(2.0, 2.0), "theirs").unwrap();

        // Both surfaces hand out the same first slot; the stamp keeps them apart.
        assert_eq!(own.key(), foreign.key());
        assert_ne!(mine.id(), other.id());
        assert!(mine.owns(own));
        assert!(!mine.owns(foreign));

        mine.set_position(foreign, Point2::new(9.0, 9.0));
        mine.set_visible(foreign, false);
        mine.set_text(foreign, "hijacked");
        assert!(!mine.destroy(foreign));
        assert_eq!(mine.coords(foreign), None);
        assert_eq!(mine.text(foreign), None);

        let item = mine.item(own).unwrap();
        assert_eq!(item.position, Point2::new(1.0, 1.0));
        assert!(item.visible);
        assert_eq!(item.kind, ItemKind::Text("mine".to_string()));
        assert_eq!(mine.item_count(), 1);
    }

    #[test]
    fn test_image_rejects_bad_buffer() {
        let mut surface = MemorySurface::new(800, 500);
        let mut image = ImageData::solid_color(2, 2, [0, 0, 0, 255]);
        image.data.truncate(3);
        let result = surface.create_image(Point2::new(0.0, 0.0), &image);
        assert!(matches!(result, Err(SurfaceError::Image(_))));
        assert_eq!(surface.item_count(), 0);
    }

    #[test]
    fn test_set_text_on_image_is_ignored() {
        let mut surface = MemorySurface::new(800, 500);
        let handle = surface
            .create_image(Point2::new(0.0, 0.0), &ImageData::solid_color(1, 1, [0; 4]))
            .unwrap();
        surface.set_text(handle, "nope");
        assert_eq!(surface.text(handle), None);
    }

    #[test]
    fn test_render_ascii() {
        let mut surface = MemorySurface::new(100, 100);
        surface.create_text(Point2::new(50.0, 5.0), "abc").unwrap();
        surface
            .create_image(Point2::new(0.0, 95.0), &ImageData::solid_color(1, 1, [0; 4]))
            .unwrap();
        let hidden = surface.create_text(Point2::new(50.0, 50.0), "hidden").unwrap();
        surface.set_visible(hidden, false);

        let ascii = surface.render_ascii(10, 10);
        let lines: Vec<&str> = ascii.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "    abc");
        assert_eq!(lines[5], "");
        assert_eq!(lines[9], "#");
    }
}

// Copyright 2026 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A minimal retained scene graph: containers holding glyph sprites.
//!
//! Containers carry a position, a rotation and a pivot. A child at local
//! point `p` ends up at `position + R(rotation) * (p - pivot)` in the parent.
//! Sprites hold a frame from the atlas and a destination rectangle in their
//! container's coordinates.
//!
//! Sprites only hold graphics resources while they are attached to a
//! [`Surface`](crate::Surface): attaching binds each sprite to a texture
//! slot in the surface's [`Bindings`], and destroying a node releases them.

use kurbo::{Affine, Point, Rect};

/// Handle to a texture slot on a surface.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BindingId(pub u32);

/// Texture slots held by the sprites of one surface.
///
/// Slots are reused after release, so the table only grows to the largest
/// number of sprites attached at once.
#[derive(Debug, Default, Clone)]
pub struct Bindings {
    slots: Vec<Option<char>>,
    free: Vec<u32>,
    live: usize,
}

impl Bindings {
    /// Binds `glyph` to a slot.
    pub fn bind(&mut self, glyph: char) -> BindingId {
        self.live += 1;
        if let Some(id) = self.free.pop() {
            self.slots[id as usize] = Some(glyph);
            return BindingId(id);
        }
        let id = u32::try_from(self.slots.len()).expect("Bindings: too many sprites for u32 slots");
        self.slots.push(Some(glyph));
        BindingId(id)
    }

    /// Releases a slot. Releasing an unbound slot does nothing.
    pub fn release(&mut self, id: BindingId) {
        if let Some(slot) = self.slots.get_mut(id.0 as usize) {
            if slot.take().is_some() {
                self.live -= 1;
                self.free.push(id.0);
            }
        }
    }

    /// Glyph bound to `id`, if the slot is live.
    #[must_use]
    pub fn glyph(&self, id: BindingId) -> Option<char> {
        self.slots.get(id.0 as usize).copied().flatten()
    }

    /// Number of live slots.
    #[must_use]
    pub fn live(&self) -> usize {
        self.live
    }

    /// Total slots ever allocated, live or free.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}

/// A single glyph image.
#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    /// Character drawn.
    pub glyph: char,
    /// Source frame in atlas page pixels.
    pub frame: Rect,
    /// Destination rectangle in the parent container's coordinates.
    pub rect: Rect,
    binding: Option<BindingId>,
}

impl Sprite {
    /// Creates an unbound sprite.
    #[must_use]
    pub fn new(glyph: char, frame: Rect, rect: Rect) -> Self {
        Self {
            glyph,
            frame,
            rect,
            binding: None,
        }
    }

    /// Texture slot held by this sprite, if attached.
    #[must_use]
    pub fn binding(&self) -> Option<BindingId> {
        self.binding
    }
}

/// A node of the scene graph.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// A glyph sprite.
    Sprite(Sprite),
    /// A nested container.
    Container(Container),
}

impl Node {
    fn bind(&mut self, bindings: &mut Bindings) {
        match self {
            Self::Sprite(sprite) => {
                if sprite.binding.is_none() {
                    sprite.binding = Some(bindings.bind(sprite.glyph));
                }
            }
            Self::Container(container) => container.bind(bindings),
        }
    }

    fn destroy(&mut self, bindings: &mut Bindings) {
        match self {
            Self::Sprite(sprite) => {
                if let Some(id) = sprite.binding.take() {
                    bindings.release(id);
                }
            }
            Self::Container(container) => container.destroy(bindings),
        }
    }
}

/// A positioned group of nodes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Container {
    /// Position of the pivot in the parent's coordinates.
    pub position: Point,
    /// Rotation in radians about the pivot.
    pub rotation: f64,
    /// Point in local coordinates that `position` refers to and rotation turns about.
    pub pivot: Point,
    children: Vec<Node>,
    destroyed: bool,
}

impl Container {
    /// Creates an empty container at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Transform from this container's coordinates into its parent's.
    #[must_use]
    pub fn local_transform(&self) -> Affine {
        Affine::translate(self.position.to_vec2())
            * Affine::rotate(self.rotation)
            * Affine::translate(-self.pivot.to_vec2())
    }

    /// Direct children.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Number of direct children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if the container has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Whether [`Container::destroy`] has run on this container.
    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Appends a sprite.
    pub fn add_sprite(&mut self, sprite: Sprite) {
        self.children.push(Node::Sprite(sprite));
    }

    /// Appends a nested container and returns its index.
    pub fn add_container(&mut self, container: Self) -> usize {
        self.children.push(Node::Container(container));
        self.children.len() - 1
    }

    /// Removes and returns every child without releasing anything they hold.
    pub fn remove_children(&mut self) -> Vec<Node> {
        core::mem::take(&mut self.children)
    }

    /// Removes the child at `index`.
    pub fn remove_child(&mut self, index: usize) -> Option<Node> {
        (index < self.children.len()).then(|| self.children.remove(index))
    }

    /// Total sprites in this subtree.
    #[must_use]
    pub fn sprite_count(&self) -> usize {
        self.children
            .iter()
            .map(|node| match node {
                Node::Sprite(_) => 1,
                Node::Container(c) => c.sprite_count(),
            })
            .sum()
    }

    /// Sprites in this subtree with their transform into this container's parent.
    ///
    /// Sprites are visited depth first in child order.
    pub fn visit_sprites(&self, parent: Affine, f: &mut impl FnMut(&Sprite, Affine)) {
        let transform = parent * self.local_transform();
        for node in &self.children {
            match node {
                Node::Sprite(sprite) => f(sprite, transform),
                Node::Container(c) => c.visit_sprites(transform, f),
            }
        }
    }

    pub(crate) fn bind(&mut self, bindings: &mut Bindings) {
        for child in &mut self.children {
            child.bind(bindings);
        }
    }

    /// Destroys each child in place, leaving the destroyed nodes attached.
    pub(crate) fn destroy_children(&mut self, bindings: &mut Bindings) {
        for child in &mut self.children {
            child.destroy(bindings);
        }
    }

    /// Releases every binding in the subtree and drops all descendants.
    ///
    /// The container itself stays where it is in its parent; removing it is
    /// a separate step.
    pub fn destroy(&mut self, bindings: &mut Bindings) {
        self.destroy_children(bindings);
        self.children.clear();
        self.destroyed = true;
    }
}

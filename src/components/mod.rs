//! ECS components for scene entities.
//!
//! This module groups the component types attached to entities in the glade.
//! Components define data such as position, velocity, draw order, proximity
//! radii, and the domain markers for the wanderer, spores, and the amanita.
//!
//! Submodules overview:
//! - [`amanita`] – the one-per-scene encounter mushroom
//! - [`animation`] – animation track selection handed to the renderer
//! - [`depthsorted`] – marker for entities whose draw order follows their y
//! - [`dialoguetrigger`] – fixed points that fire cooldown-gated speech
//! - [`dynamictext`] – text content rendered by the host
//! - [`group`] – tag component for grouping entities by name
//! - [`inputcontrolled`] – movement intent for player-driven entities
//! - [`mapposition`] – world-space position of an entity
//! - [`persistent`] – marker for entities that survive scene teardown
//! - [`proximity`] – circular interaction zones and the overlap test
//! - [`rigidbody`] – kinematic body storing velocity
//! - [`signalbinding`] – binds a text entity to a world signal (HUD counter)
//! - [`speechbubble`] – transient dialogue/celebration bubbles
//! - [`spore`] – collectible spore marker
//! - [`tint`] – color values handed to the renderer
//! - [`ttl`] – countdown that despawns transient entities
//! - [`twinkle`] – decorative glimmer marker
//! - [`wanderer`] – the player-controlled actor marker
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod amanita;
pub mod animation;
pub mod depthsorted;
pub mod dialoguetrigger;
pub mod dynamictext;
pub mod group;
pub mod inputcontrolled;
pub mod mapposition;
pub mod persistent;
pub mod proximity;
pub mod rigidbody;
pub mod signalbinding;
pub mod speechbubble;
pub mod spore;
pub mod tint;
pub mod ttl;
pub mod twinkle;
pub mod wanderer;
pub mod zindex;

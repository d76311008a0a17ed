//! Scene bootstrap for the glade.
//!
//! These are the state-enter hooks registered in the
//! [`SystemsStore`](crate::resources::systemsstore::SystemsStore) and run by
//! the game-state observer: [`setup`] loads the authored layout and queues
//! asset work for the host, [`enter_play`] spawns the scene population.
//! [`clean_all_entities`] tears the scene down, sparing persistent entities.

use bevy_ecs::prelude::*;
use log::info;

use crate::components::amanita::Amanita;
use crate::components::animation::Animation;
use crate::components::depthsorted::DepthSorted;
use crate::components::dialoguetrigger::DialogueTrigger;
use crate::components::dynamictext::DynamicText;
use crate::components::group::Group;
use crate::components::inputcontrolled::InputControlled;
use crate::components::mapposition::MapPosition;
use crate::components::persistent::Persistent;
use crate::components::proximity::ProximityZone;
use crate::components::rigidbody::RigidBody;
use crate::components::signalbinding::SignalBinding;
use crate::components::spore::Spore;
use crate::components::tint::Rgba;
use crate::components::twinkle::Twinkle;
use crate::components::wanderer::Wanderer;
use crate::components::zindex::ZIndex;
use crate::events::audio::{AudioCmd, MUSIC_ID};
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::scenelayout::SceneLayout;
use crate::systems::depth::{DEPTH_BEHIND_LAYERS, DEPTH_BETWEEN_LAYERS};

/// Spores scatter inside a sub-rectangle of the glade: a side margin and a
/// band below the tree line.
const SPORE_MARGIN_X: f32 = 50.0;
const SPORE_FIELD_TOP: f32 = 240.0;
const SPORE_FIELD_BOTTOM_PAD: f32 = 10.0;

/// HUD elements draw over everything the depth system touches.
const HUD_ZINDEX: i32 = 7;
const HUD_FONT_SIZE: f32 = 20.0;

/// First hook: resolve the authored layout and queue asset loading, then
/// hand over to `Playing`.
pub fn setup(
    mut commands: Commands,
    mut next_state: ResMut<NextGameState>,
    config: Res<GameConfig>,
    mut audio: MessageWriter<AudioCmd>,
) {
    let layout = SceneLayout::load_or_default(&config.layout_path);
    commands.insert_resource(layout);

    audio.write(AudioCmd::LoadMusic {
        id: MUSIC_ID.into(),
        path: "./assets/audio/basesong.wav".into(),
    });

    next_state.set(GameStates::Playing);
    info!("Scene setup done, next state set to Playing");
}

/// Second hook: spawn the scene population from the layout and the config.
pub fn enter_play(
    mut commands: Commands,
    config: Res<GameConfig>,
    layout: Res<SceneLayout>,
    mut audio: MessageWriter<AudioCmd>,
) {
    let mut rng = if config.seed != 0 {
        fastrand::Rng::with_seed(config.seed)
    } else {
        fastrand::Rng::new()
    };

    // The wanderer starts between the two bush layers.
    commands.spawn((
        Group::new("wanderer"),
        Wanderer,
        MapPosition::new(layout.wanderer.x, layout.wanderer.y),
        RigidBody::new(),
        Animation::default(),
        InputControlled::new(config.move_speed),
        DepthSorted,
        ZIndex(DEPTH_BETWEEN_LAYERS),
    ));

    // Spores scatter over the lower part of the glade.
    let spore_span_x = config.world_width - 2.0 * SPORE_MARGIN_X;
    let spore_span_y = config.world_height - SPORE_FIELD_BOTTOM_PAD - SPORE_FIELD_TOP;
    for _ in 0..config.spore_count {
        let x = SPORE_MARGIN_X + rng.f32() * spore_span_x;
        let y = SPORE_FIELD_TOP + rng.f32() * spore_span_y;
        commands.spawn((
            Group::new("spores"),
            Spore,
            MapPosition::new(x, y),
            ProximityZone::new(config.pickup_radius),
            DepthSorted,
            ZIndex(DEPTH_BETWEEN_LAYERS),
        ));
    }

    // The amanita waits behind the bushes.
    commands.spawn((
        Group::new("amanita"),
        Amanita::new(layout.amanita_vibe),
        MapPosition::new(layout.amanita.x, layout.amanita.y),
        ProximityZone::new(config.encounter_radius),
        DepthSorted,
        ZIndex(DEPTH_BEHIND_LAYERS),
    ));

    // Twinkles are pure decoration but still depth-sort.
    for _ in 0..config.twinkle_count {
        commands.spawn((
            Group::new("twinkles"),
            Twinkle,
            MapPosition::new(
                rng.f32() * config.world_width,
                rng.f32() * config.world_height,
            ),
            DepthSorted,
            ZIndex(DEPTH_BETWEEN_LAYERS),
        ));
    }

    // Fixed dialogue points.
    for def in &layout.dialogue_triggers {
        commands.spawn((
            Group::new("dialogue"),
            MapPosition::new(def.x, def.y),
            DialogueTrigger::new(def.text.clone()),
        ));
    }

    // HUD spore counter, kept in sync through the signal binding.
    commands.spawn((
        Group::new("hud"),
        MapPosition::new(20.0, 20.0),
        ZIndex(HUD_ZINDEX),
        DynamicText::new("Spores: 0", "monospace", HUD_FONT_SIZE, Rgba::WHITE),
        SignalBinding::new("spores").with_format("Spores: {}"),
    ));

    audio.write(AudioCmd::PlayMusic {
        id: MUSIC_ID.into(),
        looped: true,
    });

    info!(
        "Scene populated: {} spores, {} twinkles, {} dialogue triggers",
        config.spore_count,
        config.twinkle_count,
        layout.dialogue_triggers.len()
    );
}

/// Despawn every scene entity, sparing observers and registered hooks.
pub fn clean_all_entities(mut commands: Commands, query: Query<Entity, Without<Persistent>>) {
    for entity in query.iter() {
        commands.entity(entity).try_despawn();
    }
}

//! Sporeglade demo driver.
//!
//! A headless development session for the glade interaction core:
//! - builds the ECS world and the tick schedule,
//! - walks the wanderer around the glade on a scripted lap,
//! - stands in for the host collaborators (logs audio commands, answers the
//!   resonance prompt from a CLI flag),
//! - logs what the scene does.
//!
//! There is no window: rendering, audio playback, and real input devices
//! belong to an embedding host. This binary exists so the core can be run
//! and observed on its own.
//!
//! # Running
//!
//! ```sh
//! cargo run -- --ticks 1200 --tuning-reply 3
//! ```

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use glam::Vec2;
use log::info;
use std::path::PathBuf;

use sporeglade::components::mapposition::MapPosition;
use sporeglade::components::persistent::Persistent;
use sporeglade::components::wanderer::Wanderer;
use sporeglade::events::gamestate::observe_gamestate_change_event;
use sporeglade::events::input::PointerDragEvent;
use sporeglade::events::pickup::observe_spore_collected;
use sporeglade::game;
use sporeglade::resources::audio::setup_audio_bridge;
use sporeglade::resources::camerafx::CameraFx;
use sporeglade::resources::gameconfig::GameConfig;
use sporeglade::resources::gamestate::{GameState, NextGameState};
use sporeglade::resources::input::InputState;
use sporeglade::resources::joystick::{JoystickState, VirtualJoystick};
use sporeglade::resources::resonance::{ResonanceState, TuningReply, setup_tuning_bridge};
use sporeglade::resources::sporecount::SporeCount;
use sporeglade::resources::systemsstore::SystemsStore;
use sporeglade::resources::worldsignals::WorldSignals;
use sporeglade::resources::worldtime::WorldTime;
use sporeglade::systems::audio::{forward_audio_cmds, update_audio_cmd_messages};
use sporeglade::systems::camerafx::camera_fx;
use sporeglade::systems::depth::assign_depth;
use sporeglade::systems::dialogue::dialogue_triggers;
use sporeglade::systems::economy::publish_spore_count;
use sporeglade::systems::gamestate::{check_pending_state, start_on_action, state_is_playing};
use sporeglade::systems::input::resolve_movement_input;
use sporeglade::systems::joystick::{update_pointer_drag_messages, virtual_joystick};
use sporeglade::systems::movement::movement;
use sporeglade::systems::pickup::spore_pickup;
use sporeglade::systems::resonance::resonance_encounter;
use sporeglade::systems::signalbinding::update_signal_bindings;
use sporeglade::systems::time::update_world_time;
use sporeglade::systems::ttl::ttl_system;

/// Sporeglade headless driver
#[derive(Parser)]
#[command(version, about = "Headless driver for the sporeglade interaction core")]
struct Cli {
    /// Number of ticks to simulate.
    #[arg(long, default_value_t = 1200)]
    ticks: u32,

    /// Fixed timestep in seconds.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Path to the configuration file.
    #[arg(long, default_value = "./config.ini")]
    config: PathBuf,

    /// Reply sent whenever the scene asks for a tuning value.
    #[arg(long, default_value = "3")]
    tuning_reply: String,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        info!("Using default config: {}", e);
    }

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(WorldSignals::default());
    world.insert_resource(InputState::default());
    world.insert_resource(JoystickState::default());
    world.insert_resource(VirtualJoystick::new(
        Vec2::new(100.0, config.world_height - 100.0),
        config.joystick_radius,
    ));
    world.insert_resource(SporeCount::default());
    world.insert_resource(CameraFx::default());
    world.insert_resource(Messages::<PointerDragEvent>::default());
    world.insert_resource(config);

    // Host collaborator ends: audio command stream and the tuning prompt.
    let rx_audio = setup_audio_bridge(&mut world);
    let (rx_prompt, tx_reply) = setup_tuning_bridge(&mut world);

    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());

    // Scene hooks, addressable by the game-state observer.
    // Registered systems live as entities; mark them persistent so scene
    // teardown spares them.
    let mut systems_store = SystemsStore::new();

    let setup_system_id = world.register_system(game::setup);
    world
        .entity_mut(setup_system_id.entity())
        .insert(Persistent);
    systems_store.insert("setup", setup_system_id);

    let enter_play_system_id = world.register_system(game::enter_play);
    world
        .entity_mut(enter_play_system_id.entity())
        .insert(Persistent);
    systems_store.insert("enter_play", enter_play_system_id);

    let clean_all_entities_system_id = world.register_system(game::clean_all_entities);
    world
        .entity_mut(clean_all_entities_system_id.entity())
        .insert(Persistent);
    systems_store.insert("clean_all_entities", clean_all_entities_system_id);

    world.insert_resource(systems_store);

    world.spawn((Observer::new(observe_gamestate_change_event), Persistent));
    world.spawn((Observer::new(observe_spore_collected), Persistent));
    // Observers must be registered before any system can trigger events.
    world.flush();

    // --------------- Tick schedule ---------------
    let mut update = Schedule::default();
    update.add_systems(start_on_action);
    update.add_systems(check_pending_state.after(start_on_action));
    update.add_systems((update_pointer_drag_messages, virtual_joystick).chain());
    update.add_systems(
        resolve_movement_input
            .run_if(state_is_playing)
            .after(virtual_joystick),
    );
    update.add_systems(
        movement
            .run_if(state_is_playing)
            .after(resolve_movement_input),
    );
    update.add_systems(assign_depth.after(movement));
    update.add_systems(spore_pickup.run_if(state_is_playing).after(movement));
    update.add_systems(
        resonance_encounter
            .run_if(state_is_playing)
            .after(spore_pickup),
    );
    update.add_systems(dialogue_triggers.run_if(state_is_playing).after(movement));
    update.add_systems(ttl_system.after(dialogue_triggers));
    update.add_systems(camera_fx.after(resonance_encounter));
    update.add_systems(publish_spore_count.after(resonance_encounter));
    update.add_systems(update_signal_bindings.after(publish_spore_count));
    update.add_systems((update_audio_cmd_messages, forward_audio_cmds).chain());

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    for tick in 0..cli.ticks {
        script_input(&mut world, tick);
        update_world_time(&mut world, cli.dt);
        update.run(&mut world);
        world.clear_trackers();

        // Stand-in audio collaborator: just log what would play.
        for cmd in rx_audio.try_iter() {
            info!("[audio] {:?}", cmd);
        }

        // Stand-in prompt UI: answer immediately from the CLI flag.
        for prompt in rx_prompt.try_iter() {
            info!(
                "[prompt] tune your vibe ({}-{}) -> {:?}",
                prompt.min, prompt.max, cli.tuning_reply
            );
            let _ = tx_reply.send(TuningReply::new(cli.tuning_reply.clone()));
        }
    }

    let spores = world.resource::<SporeCount>().get();
    let phase = world.resource::<ResonanceState>().phase;
    let mut wanderer_query = world.query_filtered::<&MapPosition, With<Wanderer>>();
    let position = wanderer_query
        .single(&world)
        .map(|p| p.pos)
        .unwrap_or(Vec2::ZERO);
    info!(
        "Session over after {} ticks: {} spores, wanderer at ({:.0}, {:.0}), resonance {:?}",
        cli.ticks, spores, position.x, position.y, phase
    );
}

/// Scripted session input: press start, then walk laps of the glade so the
/// wanderer sweeps the spore field and crosses the depth bands.
fn script_input(world: &mut World, tick: u32) {
    let mut input = world.resource_mut::<InputState>();
    input.action_start.set_active(tick == 0);

    let phase = tick % 400;
    input.direction_right.set_active(phase < 100);
    input.direction_down.set_active((100..200).contains(&phase));
    input.direction_left.set_active((200..300).contains(&phase));
    input.direction_up.set_active(phase >= 300);
}

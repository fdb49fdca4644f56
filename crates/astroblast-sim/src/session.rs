//! Session controller, the core of the game.
//!
//! `Session` owns every piece of session state, processes queued commands,
//! runs the per-tick systems in a fixed order and produces
//! `SessionSnapshot`s. Audio and display are injected ports; nothing here
//! touches global state.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use astroblast_core::commands::PlayerCommand;
use astroblast_core::constants::*;
use astroblast_core::entities::{Enemy, Explosion, Projectile};
use astroblast_core::enums::{SessionPhase, SoundEffect};
use astroblast_core::events::GameEvent;
use astroblast_core::level::{LevelConfig, LevelTable};
use astroblast_core::state::SessionSnapshot;
use astroblast_core::types::{SimTime, Viewport};

use crate::ports::{AudioSink, Display, InputSource, NullAudio};
use crate::systems;
use crate::systems::boss::BossBrain;
use crate::systems::snapshot::SessionStatus;
use crate::systems::spawner::SpawnDirector;
use crate::systems::Feedback;
use crate::world::World;
use crate::world_setup;

/// Configuration for starting a new session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RNG seed. Same seed and same inputs give the same session.
    pub seed: u64,
    pub levels: LevelTable,
    pub start_level: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            levels: LevelTable::default(),
            start_level: 1,
        }
    }
}

/// Result of asking for the next tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelAdvance {
    /// Now playing this level.
    Advanced(u32),
    /// There is no tier after the current one. The session is terminal.
    CampaignComplete,
}

/// The session. Owns all game state.
pub struct Session {
    levels: LevelTable,
    tuning: LevelConfig,
    level: u32,
    score: u32,
    lives: u32,
    time: SimTime,
    phase: SessionPhase,
    viewport: Viewport,
    world: World,
    /// `time.elapsed_secs` at the last accepted player shot.
    last_shot_time: Option<f32>,
    spawner: SpawnDirector,
    boss: Option<BossBrain>,
    boss_spawn_pending: bool,
    rng: ChaCha8Rng,
    feedback: Feedback,
    command_queue: VecDeque<PlayerCommand>,
    audio: Box<dyn AudioSink + Send>,
    display: Box<dyn Display + Send>,
}

impl Session {
    /// Session on the default viewport with audio discarded.
    pub fn new(config: SessionConfig) -> Self {
        Self::with_ports(config, Box::new(NullAudio), Box::new(Viewport::default()))
    }

    /// Session wired to the given audio and display collaborators.
    pub fn with_ports(
        config: SessionConfig,
        audio: Box<dyn AudioSink + Send>,
        display: Box<dyn Display + Send>,
    ) -> Self {
        let viewport = display.viewport_size();
        let level = resolve_level(&config.levels, config.start_level);
        let tuning = config.levels.for_level(level).clone();
        let mut session = Self {
            levels: config.levels,
            tuning,
            level,
            score: 0,
            lives: STARTING_LIVES,
            time: SimTime::default(),
            phase: SessionPhase::Active,
            viewport,
            world: World::new(viewport),
            last_shot_time: None,
            spawner: SpawnDirector::default(),
            boss: None,
            boss_spawn_pending: false,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            feedback: Feedback::default(),
            command_queue: VecDeque::new(),
            audio,
            display,
        };
        session.configure_level(level);
        session
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the session by `dt` seconds and return the resulting snapshot.
    ///
    /// Paused and terminal sessions are left untouched.
    pub fn tick(&mut self, dt: f32, input: &impl InputSource) -> SessionSnapshot {
        self.process_commands();

        if self.phase.is_frozen() {
            return self.snapshot();
        }

        let dt = clamp_dt(dt);
        self.viewport = self.display.viewport_size();
        self.time.advance(dt);

        if !self.tuning.is_boss_level && self.time.elapsed_secs >= self.tuning.level_duration_secs {
            self.complete_level();
            return self.finish_tick();
        }

        self.run_systems(dt, input);
        self.finish_tick()
    }

    /// Current state without advancing. Carries no events.
    pub fn snapshot(&self) -> SessionSnapshot {
        systems::snapshot::build_snapshot(&self.world, self.status(), &self.tuning, Vec::new())
    }

    /// Freeze the simulation and pause the music.
    pub fn pause(&mut self) {
        if self.phase == SessionPhase::Active {
            self.phase = SessionPhase::Paused;
            self.audio.pause_music();
        }
    }

    pub fn resume(&mut self) {
        if self.phase == SessionPhase::Paused {
            self.phase = SessionPhase::Active;
            self.audio.resume_music();
        }
    }

    /// Replay the current level from scratch: score 0, full lives, empty world.
    pub fn restart(&mut self) {
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.configure_level(self.level);
        info!(level = self.level, "session restarted");
    }

    /// Move to the next tier, keeping the score.
    pub fn advance_to_next_level(&mut self) -> LevelAdvance {
        if self.level >= self.levels.max_level() {
            if self.phase != SessionPhase::CampaignComplete {
                self.phase = SessionPhase::CampaignComplete;
                self.audio.stop_music();
                info!(score = self.score, "campaign complete");
            }
            return LevelAdvance::CampaignComplete;
        }
        let next = self.level + 1;
        self.lives = STARTING_LIVES;
        self.configure_level(next);
        LevelAdvance::Advanced(next)
    }

    /// Begin a fresh run on `level`. Unknown levels start the base tier.
    pub fn start_level(&mut self, level: u32) {
        let level = resolve_level(&self.levels, level);
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.configure_level(level);
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn tuning(&self) -> &LevelConfig {
        &self.tuning
    }

    pub fn is_charging(&self) -> bool {
        self.world.has_boss() && self.boss.is_some_and(|b| b.is_charging())
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.world.enemies
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.world.projectiles
    }

    pub fn enemy_projectiles(&self) -> &[Projectile] {
        &self.world.enemy_projectiles
    }

    pub fn explosions(&self) -> impl Iterator<Item = &Explosion> {
        self.world.explosions.iter()
    }

    /// Place an enemy directly (bypasses the spawn director).
    #[cfg(test)]
    pub fn spawn_test_enemy(
        &mut self,
        position: astroblast_core::types::Vec2,
        kind: astroblast_core::enums::EnemyKind,
    ) -> astroblast_core::entities::EntityId {
        let id = world_setup::spawn_enemy(&mut self.world, position, kind, &mut self.feedback);
        if kind == astroblast_core::enums::EnemyKind::Boss {
            self.boss = Some(BossBrain::new(id));
            self.boss_spawn_pending = false;
        }
        id
    }

    /// Place a projectile directly, owned by `owner`, moving along `direction`.
    #[cfg(test)]
    pub fn spawn_test_projectile(
        &mut self,
        position: astroblast_core::types::Vec2,
        owner: astroblast_core::enums::Owner,
        direction: astroblast_core::types::Vec2,
    ) -> astroblast_core::entities::EntityId {
        let id = self.world.next_id();
        let projectile = Projectile {
            id,
            position,
            owner,
            direction,
        };
        match owner {
            astroblast_core::enums::Owner::Player => self.world.projectiles.push(projectile),
            astroblast_core::enums::Owner::Enemy => self.world.enemy_projectiles.push(projectile),
        }
        id
    }

    #[cfg(test)]
    pub fn set_lives(&mut self, lives: u32) {
        self.lives = lives;
    }

    /// Drop the scheduled boss so the level runs without one.
    #[cfg(test)]
    pub fn cancel_boss_spawn(&mut self) {
        self.boss_spawn_pending = false;
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Pause => self.pause(),
            PlayerCommand::Resume => self.resume(),
            PlayerCommand::Restart => self.restart(),
            PlayerCommand::AdvanceLevel => {
                if self.phase == SessionPhase::LevelCompleted {
                    self.advance_to_next_level();
                } else {
                    debug!(phase = ?self.phase, "advance ignored: level not completed");
                }
            }
            PlayerCommand::StartLevel { level } => self.start_level(level),
        }
    }

    /// Reset the world and timers and apply `level`'s tuning.
    fn configure_level(&mut self, level: u32) {
        self.level = level;
        self.tuning = self.levels.for_level(level).clone();
        self.time = SimTime::default();
        self.phase = SessionPhase::Active;
        self.viewport = self.display.viewport_size();
        self.world.reset(self.viewport);
        self.last_shot_time = None;
        self.spawner.reset();
        self.boss = None;
        self.boss_spawn_pending = self.tuning.is_boss_level;
        self.feedback.clear();
        self.audio.play_music(self.tuning.music);
        info!(
            level,
            boss = self.tuning.is_boss_level,
            duration_secs = self.tuning.level_duration_secs,
            "level configured"
        );
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f32, input: &impl InputSource) {
        let viewport = self.viewport;

        // 1. Player movement and fire
        systems::movement::move_player(&mut self.world, input.move_intent(), dt, viewport);
        if input.shoot_triggered() && self.shot_ready() {
            world_setup::spawn_player_projectile(&mut self.world, &mut self.feedback);
            self.last_shot_time = Some(self.time.elapsed_secs);
        }

        // 2. Projectiles
        systems::movement::move_projectiles(
            &mut self.world,
            self.tuning.enemy_projectile_speed,
            dt,
            viewport,
        );

        // 3. Enemies or boss
        if self.tuning.is_boss_level {
            self.spawn_pending_boss();
            if let Some(brain) = self.boss.as_mut() {
                systems::boss::advance(&mut self.world, brain, self.tuning.enemy_speed, dt, viewport);
            }
        } else {
            systems::enemies::run(
                &mut self.world,
                self.tuning.enemy_speed,
                dt,
                viewport,
                &mut self.feedback,
            );
        }

        // 4. Collisions and combat
        let hits = systems::collision::find_projectile_hits(&self.world);
        let outcome = systems::combat::apply_projectile_hits(
            &mut self.world,
            &hits,
            self.level,
            &mut self.feedback,
        );
        self.score = self.score.saturating_add(outcome.points);
        if outcome.boss_defeated {
            self.boss = None;
            info!(score = self.score, "boss defeated");
            self.complete_level();
            return;
        }
        if let Some(hit) = systems::collision::find_player_hit(&self.world, &outcome.resolved) {
            let dead = systems::combat::apply_player_hit(
                &mut self.world,
                hit,
                &mut self.lives,
                &mut self.feedback,
            );
            if dead {
                self.game_over();
                return;
            }
        }

        // 5. Explosions
        systems::explosions::run(&mut self.world, dt);

        // 6. Spawning and enemy fire, or boss fire
        if self.tuning.is_boss_level {
            if let Some(brain) = self.boss.as_mut() {
                systems::boss::fire(
                    &mut self.world,
                    brain,
                    &mut self.spawner.shoot_timer,
                    self.tuning.shoot_interval_secs,
                    dt,
                );
            }
            if !self.world.has_boss() && self.time.elapsed_secs >= BOSS_QUIESCENCE_SECS {
                warn!(
                    elapsed_secs = self.time.elapsed_secs,
                    "no boss present on boss level, completing level"
                );
                self.complete_level();
            }
        } else {
            systems::spawner::run_spawns(
                &mut self.spawner,
                &mut self.world,
                &mut self.rng,
                &self.tuning,
                self.level,
                dt,
                viewport,
                &mut self.feedback,
            );
            systems::spawner::run_enemy_fire(
                &mut self.spawner,
                &mut self.world,
                &mut self.rng,
                &self.tuning,
                dt,
            );
        }
    }

    fn shot_ready(&self) -> bool {
        match self.last_shot_time {
            None => true,
            Some(last) => self.time.elapsed_secs - last >= self.tuning.player_shoot_cooldown_secs,
        }
    }

    /// Clear the arena and bring in the single boss for this level.
    fn spawn_pending_boss(&mut self) {
        if !self.boss_spawn_pending {
            return;
        }
        self.boss_spawn_pending = false;
        if self.world.has_boss() {
            return;
        }
        self.world.clear_hostiles();
        let id = world_setup::spawn_boss(&mut self.world, self.viewport.width, &mut self.feedback);
        self.boss = Some(BossBrain::new(id));
        info!(enemy_id = id, "boss spawned");
    }

    fn complete_level(&mut self) {
        self.phase = SessionPhase::LevelCompleted;
        self.feedback.sounds.push(SoundEffect::LevelComplete);
        self.feedback.events.push(GameEvent::LevelCompleted {
            level: self.level,
            score: self.score,
        });
        info!(level = self.level, score = self.score, "level completed");
    }

    fn game_over(&mut self) {
        self.phase = SessionPhase::GameOver;
        self.audio.stop_music();
        self.feedback.sounds.push(SoundEffect::GameOver);
        self.feedback.events.push(GameEvent::GameOver {
            level: self.level,
            score: self.score,
        });
        info!(level = self.level, score = self.score, "game over");
    }

    /// Flush sound cues to the audio port and build the tick's snapshot.
    fn finish_tick(&mut self) -> SessionSnapshot {
        for effect in self.feedback.sounds.drain(..) {
            self.audio.play_effect(effect);
        }
        let events = std::mem::take(&mut self.feedback.events);
        systems::snapshot::build_snapshot(&self.world, self.status(), &self.tuning, events)
    }

    fn status(&self) -> SessionStatus {
        SessionStatus {
            time: self.time,
            phase: self.phase,
            level: self.level,
            score: self.score,
            lives: self.lives,
            is_charging: self.is_charging(),
            viewport: self.viewport,
        }
    }
}

/// `level` if the table knows it, otherwise the base tier.
fn resolve_level(levels: &LevelTable, level: u32) -> u32 {
    if levels.get(level).is_some() {
        level
    } else {
        warn!(level, "unknown level requested, using level 1");
        1
    }
}

/// Clamp a host-supplied step into `[0, MAX_TICK_DT]`.
pub fn clamp_dt(dt: f32) -> f32 {
    if dt.is_finite() {
        dt.clamp(0.0, MAX_TICK_DT)
    } else {
        0.0
    }
}

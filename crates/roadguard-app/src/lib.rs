//! Frame-driven host for the ROADGUARD simulation: a fixed-rate game loop
//! thread fed by an `mpsc` command channel, publishing snapshots through a
//! shared slot for the rendering layer to poll.

pub mod game_loop;
pub mod state;

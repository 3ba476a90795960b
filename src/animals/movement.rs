//! Idle animation systems. Everything is a pure function of elapsed time,
//! so animals stay in sync with themselves across frames without state.

use bevy::prelude::*;

use super::{IdleBob, Shuttle};

pub fn animate_idle_bob(time: Res<Time>, mut query: Query<(&IdleBob, &mut Transform)>) {
    let t = time.elapsed_secs();
    for (bob, mut transform) in &mut query {
        let phase = t * bob.speed + bob.phase;
        transform.translation = bob.home.with_y(bob.home.y + phase.sin() * bob.amplitude);
        // Sway runs at a quarter of the bob rate, like a cow idly looking around.
        transform.rotation = Quat::from_rotation_y((phase * 0.25).sin() * bob.sway);
    }
}

pub fn animate_shuttle(time: Res<Time>, mut query: Query<(&Shuttle, &mut Transform)>) {
    let t = time.elapsed_secs();
    for (shuttle, mut transform) in &mut query {
        let s = (t * shuttle.speed + shuttle.phase).sin();
        transform.translation = shuttle.home + shuttle.axis * (s * shuttle.amplitude);
        transform.rotation = Quat::from_rotation_y(if s >= 0.0 {
            shuttle.yaw_forward
        } else {
            shuttle.yaw_back
        });
    }
}

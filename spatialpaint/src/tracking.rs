//! Simulated tracking: plays a script on its own thread, emitting camera poses and UI requests
//! the way a device's tracking session and touch screen would.
//!
//! Frames and requests share one channel, so the consumer sees them in script order no matter how far
//! ahead the tracking thread runs.

use crossbeam::channel;

use crate::{requests::UiRequest, script::Script};

/// One tracking update.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrackingFrame {
    /// Zero-based index of this frame in the script.
    pub index: u64,
    pub camera: spatialpaint_core::math::Pose,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TrackingEvent {
    Frame(TrackingFrame),
    Request(UiRequest),
}

pub struct Player {
    pub events: channel::Receiver<TrackingEvent>,
    pub thread: std::thread::JoinHandle<()>,
}

/// Start playing `script` on a tracking thread.
pub fn play(script: Script) -> std::io::Result<Player> {
    // Small buffer, like a real tracker that doesn't run far ahead of the consumer.
    let (send, events) = channel::bounded(4);

    let thread = std::thread::Builder::new()
        .name("Tracking".to_owned())
        .spawn(move || {
            let mut index = 0;
            for step in &script.steps {
                if let Some(request) = UiRequest::from_step(step) {
                    // Receiver hung up, nobody to track for.
                    if send.send(TrackingEvent::Request(request)).is_err() {
                        return;
                    }
                } else if let crate::script::Step::Frames { count } = step {
                    for _ in 0..*count {
                        let frame = TrackingFrame {
                            index,
                            camera: script.camera.pose(index),
                        };
                        if send.send(TrackingEvent::Frame(frame)).is_err() {
                            return;
                        }
                        index += 1;
                    }
                }
            }
            log::debug!("Tracking finished after {index} frames");
        })?;

    Ok(Player { events, thread })
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn events_in_script_order() {
        let script = Script::parse(
            r#"
            [[step]]
            do = "toggle"
            [[step]]
            do = "frames"
            count = 2
            [[step]]
            do = "undo"
            [[step]]
            do = "frames"
            count = 1
            [[step]]
            do = "clear"
            "#,
        )
        .unwrap();
        let player = play(script).unwrap();
        // Let the tracker fill the buffer before anything is read.
        std::thread::sleep(std::time::Duration::from_millis(20));

        let described: Vec<String> = player
            .events
            .iter()
            .map(|event| match event {
                TrackingEvent::Frame(frame) => format!("frame {}", frame.index),
                TrackingEvent::Request(request) => format!("{request:?}"),
            })
            .collect();
        assert_eq!(
            described,
            ["ToggleDrawing", "frame 0", "frame 1", "Undo", "frame 2", "Clear"]
        );
        player.thread.join().unwrap();
    }
}

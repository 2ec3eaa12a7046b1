//! Application core: the demo logic, zero I/O.
//!
//! Everything here talks to hardware through the **port traits** in
//! [`ports`] plus `embedded-hal` digital pins, so each loop runs on the
//! host against mocks and a virtual clock.
//!
//! | Module      | Role                                          |
//! |-------------|-----------------------------------------------|
//! | `threshold` | Sample → on/off decision                      |
//! | `queue`     | Single-slot handoff, sampler → relay          |
//! | `sampler`   | Periodic pot read                             |
//! | `relay`     | Applies decisions to the indicator            |
//! | `blink`     | Fixed or pot-controlled blink                 |
//! | `follower`  | Polled button → indicator                     |
//! | `toggle`    | Button interrupt → indicator toggle           |
//! | `demos`     | Wires the above into runnable demos           |

pub mod blink;
pub mod demos;
pub mod events;
pub mod follower;
pub mod ports;
pub mod queue;
pub mod relay;
pub mod sampler;
pub mod threshold;
pub mod toggle;

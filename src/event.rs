// NeonArcade
// copyright agam 2024~2025

//! A global event center and a global timer center.
//!
//! The event center is a name -> callback-flag map: `event_emit` raises the
//! flag for every registered callback, `event_check` consumes it. Renders
//! use it to redraw only when a model says something changed.
//!
//! The timer center holds named countdown timers, decremented once per
//! frame by `timer_update` (called from Model::update). A timer is armed
//! with `timer_fire` and cancelled with `timer_cancel`; on expiry it emits
//! its event exactly once. Every per-game cadence (snake moves, the
//! tic-tac-toe machine's reply delay, the memory hide delay) runs through
//! here, so leaving a game state always has an explicit place to cancel
//! its clock.
//!
//! Both centers are thread_local: input events and timers are serialized
//! onto the single game-loop thread, no locking needed.

use crate::GAME_FRAME;
use serde::Serialize;
use std::{cell::RefCell, collections::HashMap, rc::Rc};

thread_local! {
    static GAME_TIMER: Rc<RefCell<Timers>> = Rc::new(RefCell::new(Timers::new()));
    static EVENT_CENTER: Rc<RefCell<HashMap<String, HashMap<String, bool>>>> =
        Rc::new(RefCell::new(HashMap::new()));
}

pub fn event_register(event: &str, func: &str) {
    EVENT_CENTER.with(|ec| {
        let mut ec_ref = ec.borrow_mut();
        match ec_ref.get_mut(event) {
            Some(ht) => {
                ht.insert(func.to_string(), false);
            }
            None => {
                let mut h: HashMap<String, bool> = HashMap::new();
                h.insert(func.to_string(), false);
                ec_ref.insert(event.to_string(), h);
            }
        }
    });
}

pub fn event_check(event: &str, func: &str) -> bool {
    EVENT_CENTER.with(|ec| {
        let mut ec_ref = ec.borrow_mut();
        if let Some(ht) = ec_ref.get_mut(event) {
            if let Some(flag) = ht.get_mut(func) {
                if *flag {
                    *flag = false;
                    return true;
                }
            }
        }
        false
    })
}

pub fn event_emit(event: &str) {
    EVENT_CENTER.with(|ec| {
        let mut ec_ref = ec.borrow_mut();
        if let Some(ht) = ec_ref.get_mut(event) {
            for value in ht.values_mut() {
                if !(*value) {
                    *value = true;
                }
            }
        }
    });
}

pub fn timer_register(name: &str, time: f32, func: &str) {
    GAME_TIMER.with(|gt| {
        gt.borrow_mut().register(name, time, func);
    });
}

pub fn timer_set_time(name: &str, time: f32) {
    GAME_TIMER.with(|gt| {
        gt.borrow_mut().set_time(name, time);
    });
}

/// remaining frames of a running timer, 0 when idle
pub fn timer_stage(name: &str) -> u32 {
    GAME_TIMER.with(|gt| gt.borrow_mut().stage(name))
}

/// elapsed frames of a running timer
pub fn timer_rstage(name: &str) -> u32 {
    GAME_TIMER.with(|gt| gt.borrow_mut().rstage(name))
}

pub fn timer_percent(name: &str) -> f32 {
    GAME_TIMER.with(|gt| gt.borrow_mut().percent(name))
}

pub fn timer_exdata(name: &str) -> Option<Vec<u8>> {
    GAME_TIMER.with(|gt| gt.borrow_mut().exdata(name))
}

pub fn timer_fire<T>(name: &str, value: T)
where
    T: Serialize,
{
    GAME_TIMER.with(|gt| {
        gt.borrow_mut().fire(name, value);
    });
}

pub fn timer_cancel(name: &str, nall: bool) {
    GAME_TIMER.with(|gt| {
        gt.borrow_mut().cancel(name, nall);
    });
}

pub fn timer_update() {
    GAME_TIMER.with(|gt| {
        gt.borrow_mut().update();
    });
}

pub struct Timer {
    time: u32,
    count: u32,
    exdata: Vec<u8>,
}

#[derive(Default)]
pub struct Timers {
    pub timers: HashMap<String, Timer>,
}

impl Timers {
    pub fn new() -> Self {
        Self { ..Self::default() }
    }

    pub fn register(&mut self, name: &str, time: f32, callback: &str) {
        match self.timers.get_mut(name) {
            Some(_) => {}
            None => {
                let timer = Timer {
                    time: 0,
                    count: (time * GAME_FRAME as f32) as u32,
                    exdata: vec![],
                };
                self.timers.insert(name.to_string(), timer);
                event_register(name, callback);
            }
        }
    }

    pub fn stage(&mut self, name: &str) -> u32 {
        match self.timers.get_mut(name) {
            Some(timer) => timer.time,
            None => 0,
        }
    }

    pub fn rstage(&mut self, name: &str) -> u32 {
        match self.timers.get_mut(name) {
            Some(timer) => timer.count - timer.time,
            None => 0,
        }
    }

    pub fn percent(&mut self, name: &str) -> f32 {
        match self.timers.get_mut(name) {
            Some(timer) => timer.time as f32 / timer.count as f32,
            None => 0f32,
        }
    }

    pub fn set_time(&mut self, name: &str, time: f32) {
        if let Some(timer) = self.timers.get_mut(name) {
            timer.count = (time * GAME_FRAME as f32) as u32;
            // a very small time may round count down to 0, which could
            // never trigger; keep at least one frame
            if timer.count == 0 {
                timer.count += 1;
            }
        }
    }

    pub fn exdata(&mut self, name: &str) -> Option<Vec<u8>> {
        self.timers.get_mut(name).map(|timer| timer.exdata.clone())
    }

    /// Arms the timer: it will emit its event after its full period.
    /// value is stashed as serialized exdata for the handler.
    pub fn fire<T>(&mut self, name: &str, value: T)
    where
        T: Serialize,
    {
        if let Some(timer) = self.timers.get_mut(name) {
            timer.time = timer.count;
            timer.exdata =
                bincode::serde::encode_to_vec(&value, bincode::config::standard()).unwrap();
        }
    }

    /// Disarms the timer. With nocall = false the event is emitted once
    /// as if it had expired.
    pub fn cancel(&mut self, name: &str, nocall: bool) {
        if let Some(timer) = self.timers.get_mut(name) {
            timer.time = 0;
            if !nocall {
                event_emit(name);
            }
        }
    }

    pub fn update(&mut self) {
        for (name, timer) in &mut self.timers {
            if timer.time > 0 {
                timer.time -= 1;
                if timer.time == 0 {
                    event_emit(name);
                }
            }
        }
    }
}

mod input;
pub use input::*;

//! Control-Hazard Coordination.
//!
//! This module holds the per-cycle control state and the two redirect
//! mechanisms that act on it. It provides:
//! 1. **Cycle Context:** Stall, lock, and exit requests raised during one cycle.
//! 2. **Flush:** PC redirect plus bubble injection on a resolved misprediction.
//! 3. **Load-Use Stall:** Freezes fetch for one cycle while a load completes.
//! 4. **Exit Squash:** Stops fetch and discards the instructions younger than the exit store.
//!
//! Flush and stall share one lock per cycle, so at most one of them takes
//! effect. Execute runs before Decode, so a flush always wins.

use tracing::debug;

use crate::core::Cpu;
use crate::isa::Instruction;

/// Requests raised by the stages during one cycle.
///
/// A fresh context is created at the start of every cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CycleContext {
    /// Decode found a load-use hazard; the next clock edge freezes PC and IF/ID.
    pub stall_requested: bool,
    /// A flush or stall already fired this cycle.
    pub lock: bool,
    /// Execute saw a store to the exit address.
    pub exit_requested: bool,
}

impl CycleContext {
    /// Creates the context for a new cycle.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Why the front end was redirected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlushCause {
    /// A conditional branch resolved differently from the fall-through prediction.
    Branch,
    /// A register-indirect jump resolved to a target other than the prediction.
    JumpRegister,
}

/// Redirects fetch to `target` and squashes the two wrong-path instructions.
///
/// Writes the PC and bubbles into IF/ID and ID/EX with priority so the
/// ordinary writes Decode and Fetch make later in the cycle are dropped.
/// Does nothing if the cycle is already locked.
pub fn flush(cpu: &mut Cpu, ctx: &mut CycleContext, target: u32, cause: FlushCause) {
    if ctx.lock {
        return;
    }

    let _ = cpu.pc.write_sel(target);
    let _ = cpu.if_id.inst.write_sel(Instruction::Nop);
    let _ = cpu.id_ex.inst.write_sel(Instruction::Nop);
    ctx.lock = true;
    ctx.stall_requested = false;

    match cause {
        FlushCause::Branch => cpu.stats.branch_flushes += 1,
        FlushCause::JumpRegister => cpu.stats.jump_flushes += 1,
    }
    debug!(to = %format_args!("{target:#010x}"), ?cause, "pipeline flush");
}

/// Handles a consumer in Decode that depends on the load now in Execute.
///
/// Requests a one-cycle stall unless a flush already fired, and turns the
/// Decode→Execute slot into a bubble either way.
pub fn request_load_use_stall(cpu: &mut Cpu, ctx: &mut CycleContext) {
    if !ctx.lock {
        ctx.stall_requested = true;
        ctx.lock = true;
        cpu.stats.load_use_stalls += 1;
        debug!(pc = %format_args!("{:#010x}", cpu.if_id.pc.read()), "load-use stall");
    }
    let _ = cpu.id_ex.inst.write_sel(Instruction::Nop);
}

/// Records that the store in Execute targeted the exit address.
///
/// The instructions in IF/ID and ID/EX are younger than the store and are
/// replaced by bubbles; Fetch stops for the rest of the run.
pub fn request_exit(cpu: &mut Cpu, ctx: &mut CycleContext, addr: u32) {
    ctx.exit_requested = true;
    ctx.lock = true;
    let _ = cpu.if_id.inst.write_sel(Instruction::Nop);
    let _ = cpu.id_ex.inst.write_sel(Instruction::Nop);
    debug!(addr = %format_args!("{addr:#010x}"), "exit store detected");
}

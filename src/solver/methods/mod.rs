//! Time-stepping schemes
//!
//! This module contains concrete implementations of the
//! [`Solver`](crate::solver::Solver) trait.
//!
//! # Available Methods
//!
//! ## [`ExplicitEuler`] — forward Euler
//!
//! p_{n+1} = p_n + dt·f(p_n, t_n). First-order, one rate evaluation per
//! step, conditionally stable: the step size must resolve the fastest
//! timescale of the problem or the trajectory diverges.
//!
//! ## [`ImplicitEuler`] — backward Euler
//!
//! p_{n+1} = p_n + dt·f(p_{n+1}, t_{n+1}), solved per step by Newton
//! iteration with an LU-factored linear solve. Also first-order, but
//! A-stable: usable on stiff problems at step sizes where the explicit
//! scheme blows up.
//!
//! # Choosing a Scheme
//!
//! - **Non-stiff problems**: explicit Euler — cheapest per step
//! - **Stiff problems**: implicit Euler — more expensive per step, allows
//!   much larger steps
//!
//! Both schemes are first-order; refining the step size halves the error
//! either way. The refinement study in
//! [`solver::refinement`](crate::solver::refinement) makes that behavior
//! visible.

pub mod explicit_euler;
pub mod implicit_euler;

// Re-exports for convenience
pub use explicit_euler::ExplicitEuler;
pub use implicit_euler::ImplicitEuler;

//! Projizierter L-BFGS mit Box-Constraints für zwei Variablen.
//!
//! Variablen auf einer aktiven Grenze (Gradient zeigt nach außen) werden eingefroren,
//! die Suchrichtung kommt aus der Zwei-Schleifen-Rekursion über die freien Komponenten,
//! die Schrittweite aus einer projizierten Armijo-Backtracking-Liniensuche.

use std::collections::VecDeque;

use glam::DVec2;

use super::{SolveReport, SolverSettings, Termination};
use crate::bounds::MapBounds;
use crate::error::SolveError;

/// Armijo-Konstante für ausreichenden Abstieg.
const ARMIJO_C1: f64 = 1e-4;
/// Verkleinerungsfaktor pro Backtracking-Schritt.
const BACKTRACK_FACTOR: f64 = 0.5;

/// Ein Korrekturpaar `(s, y)` mit `rho = 1 / (s·y)`.
#[derive(Debug, Clone, Copy)]
struct CorrectionPair {
    s: DVec2,
    y: DVec2,
    rho: f64,
}

/// Unendlich-Norm des projizierten Gradienten `P(x − g) − x`.
pub(crate) fn projected_gradient_norm(x: DVec2, gradient: DVec2, bounds: &MapBounds) -> f64 {
    (bounds.clamp(x - gradient) - x).abs().max_element()
}

/// Maske der freien Variablen: 0.0 für Komponenten, die an einer Grenze
/// anliegen und deren Abstiegsrichtung aus dem Bereich hinaus zeigt.
fn free_mask(x: DVec2, gradient: DVec2, bounds: &MapBounds) -> DVec2 {
    let component = |x: f64, g: f64, lo: f64, hi: f64| {
        let pinned_low = x <= lo && g > 0.0;
        let pinned_high = x >= hi && g < 0.0;
        if pinned_low || pinned_high { 0.0 } else { 1.0 }
    };
    DVec2::new(
        component(x.x, gradient.x, bounds.min.x, bounds.max.x),
        component(x.y, gradient.y, bounds.min.y, bounds.max.y),
    )
}

/// Zwei-Schleifen-Rekursion: liefert `H · g` für die inverse Hesse-Approximation `H`.
fn apply_inverse_hessian(history: &VecDeque<CorrectionPair>, gradient: DVec2) -> DVec2 {
    let mut q = gradient;
    let mut alphas = Vec::with_capacity(history.len());
    for pair in history.iter().rev() {
        let alpha = pair.rho * pair.s.dot(q);
        q -= pair.y * alpha;
        alphas.push(alpha);
    }

    let gamma = history
        .back()
        .map_or(1.0, |pair| pair.s.dot(pair.y) / pair.y.length_squared());
    let mut r = q * gamma;

    for (pair, alpha) in history.iter().zip(alphas.iter().rev()) {
        let beta = pair.rho * pair.y.dot(r);
        r += pair.s * (alpha - beta);
    }
    r
}

/// Minimiert `objective` auf `bounds`, beginnend bei `start` (wird in den Bereich projiziert).
///
/// `objective` liefert Funktionswert und Gradient.
pub(crate) fn minimize_bounded<F>(
    objective: F,
    start: DVec2,
    bounds: &MapBounds,
    settings: &SolverSettings,
) -> Result<SolveReport, SolveError>
where
    F: Fn(DVec2) -> (f64, DVec2),
{
    let mut x = bounds.clamp(start);
    let (mut fx, mut gradient) = objective(x);
    let mut evaluations = 1;
    if !fx.is_finite() || !gradient.is_finite() {
        return Err(SolveError::NotFinite);
    }

    let history_size = settings.history_size.max(1);
    let mut history: VecDeque<CorrectionPair> = VecDeque::with_capacity(history_size);

    for iteration in 0..settings.max_iterations {
        let pg_norm = projected_gradient_norm(x, gradient, bounds);
        log::trace!(
            "L-BFGS-B it={} x=({:.6}, {:.6}) f={:e} |pg|={:e}",
            iteration,
            x.x,
            x.y,
            fx,
            pg_norm
        );
        if pg_norm <= settings.gradient_tolerance {
            return Ok(SolveReport {
                position: x,
                objective: fx,
                projected_gradient_norm: pg_norm,
                iterations: iteration,
                evaluations,
                termination: Termination::GradientTolerance,
            });
        }

        let free = free_mask(x, gradient, bounds);
        let free_gradient = gradient * free;
        let mut direction = -apply_inverse_hessian(&history, free_gradient) * free;
        if !direction.is_finite() || direction.dot(free_gradient) >= 0.0 {
            history.clear();
            direction = -free_gradient;
        }

        // Ohne Verlauf ist die Skalierung unbekannt: erster Schritt höchstens Länge 1.
        let mut alpha = if history.is_empty() {
            (1.0 / direction.length()).min(1.0)
        } else {
            1.0
        };

        let mut accepted = None;
        for _ in 0..settings.max_line_search_steps {
            let candidate = bounds.clamp(x + direction * alpha);
            let step = candidate - x;
            let (f_new, g_new) = objective(candidate);
            evaluations += 1;
            if f_new.is_finite()
                && g_new.is_finite()
                && f_new <= fx + ARMIJO_C1 * gradient.dot(step)
            {
                accepted = Some((candidate, f_new, g_new));
                break;
            }
            alpha *= BACKTRACK_FACTOR;
        }

        let Some((x_new, f_new, g_new)) = accepted else {
            if history.is_empty() {
                return Err(SolveError::LineSearchFailed {
                    iteration,
                    objective: fx,
                });
            }
            log::debug!("Liniensuche ohne Abstieg, Verlauf wird zurückgesetzt");
            history.clear();
            continue;
        };

        let s = x_new - x;
        let y = g_new - gradient;
        let sy = s.dot(y);
        if sy > f64::EPSILON * y.length_squared() {
            if history.len() == history_size {
                history.pop_front();
            }
            history.push_back(CorrectionPair { s, y, rho: 1.0 / sy });
        }

        let f_prev = fx;
        x = x_new;
        fx = f_new;
        gradient = g_new;

        let scale = f_prev.abs().max(fx.abs()).max(1.0);
        if (f_prev - fx) / scale <= settings.objective_tolerance {
            return Ok(SolveReport {
                position: x,
                objective: fx,
                projected_gradient_norm: projected_gradient_norm(x, gradient, bounds),
                iterations: iteration + 1,
                evaluations,
                termination: Termination::ObjectiveTolerance,
            });
        }
    }

    Err(SolveError::MaxIterations {
        iterations: settings.max_iterations,
    })
}

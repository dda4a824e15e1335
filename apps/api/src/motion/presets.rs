use crate::motion::placement::{Bounds, Cadence, ParticleField};

/// Canvas used by the page backgrounds.
pub const PAGE_BOUNDS: Bounds = Bounds::new(1200.0, 800.0);

/// Hero viewport when the client does not report one.
pub const DEFAULT_VIEWPORT: Bounds = Bounds::new(1200.0, 800.0);
pub const HERO_PARTICLES: usize = 20;

pub const PROJECTS: ParticleField = ParticleField {
    count: 15,
    bounds: PAGE_BOUNDS,
    duration: Cadence::new(15.0, 5, 5.0),
    delay: Cadence::new(0.0, 3, 3.0),
    round_coordinates: false,
};

pub const ABOUT: ParticleField = ParticleField {
    count: 12,
    round_coordinates: true,
    ..PROJECTS
};

pub const EXPERIENCE: ParticleField = ParticleField {
    count: 10,
    bounds: PAGE_BOUNDS,
    duration: Cadence::new(12.0, 4, 6.0),
    delay: Cadence::new(0.0, 4, 2.0),
    round_coordinates: false,
};

pub const CONTACT: ParticleField = ParticleField {
    count: 8,
    bounds: PAGE_BOUNDS,
    duration: Cadence::new(15.0, 3, 7.0),
    delay: Cadence::new(0.0, 2, 5.0),
    round_coordinates: false,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_particle_counts() {
        assert_eq!(PROJECTS.particles().len(), 15);
        assert_eq!(ABOUT.particles().len(), 12);
        assert_eq!(EXPERIENCE.particles().len(), 10);
        assert_eq!(CONTACT.particles().len(), 8);
    }

    #[test]
    fn test_about_shares_projects_layout() {
        let about = ABOUT.particles();
        let projects = PROJECTS.particles();
        for (a, p) in about.iter().zip(&projects) {
            assert!((a.x - p.x).abs() <= 0.005);
            assert_eq!(a.duration, p.duration);
            assert_eq!(a.delay, p.delay);
        }
    }

    #[test]
    fn test_contact_cadence() {
        let p = CONTACT.particle(4);
        assert_eq!(p.duration, 22.0);
        assert_eq!(p.delay, 0.0);
        assert_eq!(CONTACT.particle(5).delay, 5.0);
    }

    #[test]
    fn test_experience_cadence() {
        let p = EXPERIENCE.particle(3);
        assert_eq!(p.duration, 30.0);
        assert_eq!(p.delay, 6.0);
    }
}

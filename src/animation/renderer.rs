// SPDX-License-Identifier: MPL-2.0
//! Seam between the descriptor builders and whatever plays the animation.

use super::step::AnimationStep;

/// Turns a step sequence into a playable animation.
///
/// Implemented by the UI layer. Any `FnMut(Vec<AnimationStep>) -> T` closure
/// is a renderer, which keeps test doubles short.
pub trait AnimationRenderer {
    type Output;

    fn build(&mut self, steps: Vec<AnimationStep>) -> Self::Output;
}

impl<F, T> AnimationRenderer for F
where
    F: FnMut(Vec<AnimationStep>) -> T,
{
    type Output = T;

    fn build(&mut self, steps: Vec<AnimationStep>) -> T {
        self(steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::removal_steps;

    struct CountingRenderer {
        builds: usize,
    }

    impl AnimationRenderer for CountingRenderer {
        type Output = usize;

        fn build(&mut self, steps: Vec<AnimationStep>) -> usize {
            self.builds += 1;
            steps.len()
        }
    }

    #[test]
    fn closures_act_as_renderers() {
        let mut seen = Vec::new();
        let mut renderer = |steps: Vec<AnimationStep>| seen.push(steps);
        renderer.build(removal_steps());
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0], removal_steps());
    }

    #[test]
    fn struct_renderers_receive_every_build() {
        let mut renderer = CountingRenderer { builds: 0 };
        assert_eq!(renderer.build(removal_steps()), 2);
        assert_eq!(renderer.build(Vec::new()), 0);
        assert_eq!(renderer.builds, 2);
    }
}

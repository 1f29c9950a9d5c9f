use std::sync::Arc;

use crate::animation::action::AnimationAction;
use crate::animation::clip::AnimationClip;
use crate::scene::NodeHandle;

/// Drives the actions of one page model.
///
/// A mixer is advanced every frame whether or not its page is currently
/// tracked: losing a target silences the narration but does not freeze the
/// animation.
#[derive(Debug, Clone)]
pub struct AnimationMixer {
    root: NodeHandle,
    actions: Vec<AnimationAction>,
}

impl AnimationMixer {
    #[must_use]
    pub fn new(root: NodeHandle) -> Self {
        Self {
            root,
            actions: Vec::new(),
        }
    }

    /// Scene node the clips animate.
    #[must_use]
    pub fn root(&self) -> NodeHandle {
        self.root
    }

    /// Returns the action for `clip`, creating a stopped one on first use.
    pub fn clip_action(&mut self, clip: &Arc<AnimationClip>) -> &mut AnimationAction {
        let index = match self
            .actions
            .iter()
            .position(|a| Arc::ptr_eq(a.clip(), clip))
        {
            Some(index) => index,
            None => {
                self.actions.push(AnimationAction::new(Arc::clone(clip)));
                self.actions.len() - 1
            }
        };
        &mut self.actions[index]
    }

    #[must_use]
    pub fn actions(&self) -> &[AnimationAction] {
        &self.actions
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.actions.iter().any(AnimationAction::is_running)
    }

    pub fn update(&mut self, dt: f32) {
        for action in &mut self.actions {
            action.update(dt);
        }
    }
}

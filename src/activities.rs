use crate::models::ActivityView;

/// One entry of the recommendation catalog the model's class ids map onto.
/// `accent` is a palette name the page uses to tint the result card.
#[derive(Debug, Clone, Copy)]
pub struct Activity {
    pub name: &'static str,
    pub accent: &'static str,
    pub description: &'static str,
    pub tips: [&'static str; 3],
}

const ACTIVITIES: &[Activity] = &[
    Activity {
        name: "Study",
        accent: "blue",
        description: "Perfect time for learning and absorbing new information",
        tips: [
            "Find a quiet space",
            "Remove distractions",
            "Take breaks every 25 minutes",
        ],
    },
    Activity {
        name: "Exercise",
        accent: "green",
        description: "Your body and mind are ready for physical activity",
        tips: ["Stay hydrated", "Warm up properly", "Listen to your body"],
    },
    Activity {
        name: "Social",
        accent: "purple",
        description: "Great time to connect with friends, family, or colleagues",
        tips: [
            "Be present in conversations",
            "Put away devices",
            "Plan fun activities",
        ],
    },
    Activity {
        name: "Leisure",
        accent: "yellow",
        description: "Time to relax and enjoy your favorite activities",
        tips: [
            "Choose activities you truly enjoy",
            "Don't feel guilty about relaxing",
            "Set time limits if needed",
        ],
    },
    Activity {
        name: "Sleep",
        accent: "indigo",
        description: "Your body needs rest to recharge",
        tips: [
            "Create a calming environment",
            "Avoid screens 1 hour before sleep",
            "Keep room cool and dark",
        ],
    },
    Activity {
        name: "Work",
        accent: "red",
        description: "Optimal time for focused work and professional tasks",
        tips: [
            "Prioritize important tasks",
            "Minimize interruptions",
            "Use productivity techniques",
        ],
    },
];

pub fn activity_for(prediction: i64) -> Option<&'static Activity> {
    usize::try_from(prediction).ok().and_then(|id| ACTIVITIES.get(id))
}

pub fn activity_view(prediction: i64) -> Option<ActivityView> {
    activity_for(prediction).map(|activity| ActivityView {
        id: prediction,
        name: activity.name,
        description: activity.description,
        accent: activity.accent,
        tips: &activity.tips[..],
    })
}

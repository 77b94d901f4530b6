//! Introduction section seed data: target-audience segments.

use once_cell::sync::Lazy;

use crate::domain::prd::AudienceSegment;

pub static AUDIENCE_SEGMENTS: Lazy<Vec<AudienceSegment>> = Lazy::new(|| {
    vec![
        AudienceSegment {
            segment: "Professional Developers".to_string(),
            description: "Experienced programmers working on complex projects requiring \
                          advanced tooling"
                .to_string(),
            share: 40.0,
            needs: vec![
                "Advanced debugging".to_string(),
                "Performance optimization".to_string(),
                "Team collaboration".to_string(),
            ],
        },
        AudienceSegment {
            segment: "Student Developers".to_string(),
            description: "Computer science students and coding bootcamp participants \
                          learning to code"
                .to_string(),
            share: 35.0,
            needs: vec![
                "Learning resources".to_string(),
                "Simple interface".to_string(),
                "Educational features".to_string(),
            ],
        },
        AudienceSegment {
            segment: "Hobbyist Programmers".to_string(),
            description: "Enthusiasts working on personal projects and open-source \
                          contributions"
                .to_string(),
            share: 25.0,
            needs: vec![
                "Free tier".to_string(),
                "Community features".to_string(),
                "Project templates".to_string(),
            ],
        },
    ]
});

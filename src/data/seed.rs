use super::activity::Activity;

pub fn seed_activities() -> Vec<(&'static str, Activity)> {
    vec![
        ("Chess Club", Activity::new(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"]
        )),
        ("Programming Class", Activity::new(
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"]
        )),
        ("Gym Class", Activity::new(
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"]
        )),
        ("Basketball Team", Activity::new(
            "Competitive basketball training and inter-school matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            15,
            &["james@mergington.edu", "lucas@mergington.edu"]
        )),
        ("Swimming Club", Activity::new(
            "Swimming lessons and competitive training for all skill levels",
            "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
            25,
            &["ava@mergington.edu", "noah@mergington.edu"]
        )),
        ("Art Studio", Activity::new(
            "Explore painting, drawing, and mixed media techniques",
            "Mondays, 3:30 PM - 5:00 PM",
            18,
            &["mia@mergington.edu", "lily@mergington.edu"]
        )),
        ("Drama Club", Activity::new(
            "Acting, theater production, and performance arts",
            "Thursdays, 3:30 PM - 5:30 PM",
            25,
            &["ethan@mergington.edu", "charlotte@mergington.edu"]
        )),
        ("Debate Team", Activity::new(
            "Develop critical thinking and public speaking through competitive debates",
            "Wednesdays, 4:00 PM - 5:30 PM",
            16,
            &["william@mergington.edu", "amelia@mergington.edu"]
        )),
        ("Science Olympiad", Activity::new(
            "Compete in science challenges and experiments across various disciplines",
            "Tuesdays, 3:30 PM - 5:00 PM",
            20,
            &["benjamin@mergington.edu", "isabella@mergington.edu"]
        )),
    ]
}

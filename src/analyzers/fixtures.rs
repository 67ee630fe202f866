use crate::passenger::{Passenger, Pclass, Sex};

/// Builds a passenger with no family aboard and a generic name.
pub(crate) fn passenger(pclass: u8, sex: Sex, age: Option<f64>, survived: bool) -> Passenger {
    Passenger {
        passenger_id: 0,
        pclass: Pclass::try_from(pclass).unwrap(),
        sex,
        age,
        survived,
        sib_sp: 0,
        parch: 0,
        fare: 10.0,
        name: "Doe, Mr. John".to_string(),
    }
}

/// Builds a passenger for fare grouping.
pub(crate) fn family_member(pclass: u8, sib_sp: u32, parch: u32, fare: f64) -> Passenger {
    Passenger {
        sib_sp,
        parch,
        fare,
        ..passenger(pclass, Sex::Male, Some(30.0), false)
    }
}

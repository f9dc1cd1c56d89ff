//! MABIMS month starts as adopted by the Indonesian government calendar,
//! 1 Muharram 1430 AH (2008-12-29) through 1 Muharram 1455 AH.
//!
//! Entry `i` is lunar month ordinal `i + MABIMS_EPOCH`. Months with a
//! conjunction before 2022 follow the 2-3-8 visibility criterion, later
//! months the 3-6.4 criterion, both evaluated at Banda Aceh. Isbat
//! decisions that differ from the criterion are applied on top:
//! 1 Ramadhan 1431, 1 Syawal 1436, 1 Ramadhan 1446, 1 Dzulhijjah 1446,
//! 1 Rajab 1447, 1 Syawal 1447, 1 Dzulkaidah 1447 and 1 Rajab 1448.

#[rustfmt::skip]
pub(crate) static MABIMS_MONTH_STARTS: [i32; 301] = [
    54830, 54860, 54889, 54919, 54949, 54978, 55007, 55036, 55066, 55095, 55125, 55154,
    55184, 55214, 55244, 55273, 55303, 55332, 55362, 55391, 55420, 55450, 55479, 55509,
    55538, 55568, 55598, 55627, 55657, 55687, 55716, 55746, 55775, 55805, 55834, 55863,
    55893, 55922, 55952, 55981, 56011, 56041, 56070, 56100, 56130, 56159, 56189, 56218,
    56247, 56277, 56306, 56336, 56365, 56395, 56424, 56454, 56484, 56513, 56543, 56572,
    56602, 56631, 56661, 56690, 56720, 56749, 56779, 56808, 56838, 56867, 56897, 56927,
    56956, 56986, 57015, 57045, 57074, 57104, 57133, 57162, 57192, 57221, 57251, 57281,
    57310, 57340, 57370, 57399, 57429, 57458, 57488, 57517, 57546, 57576, 57605, 57635,
    57664, 57694, 57724, 57754, 57783, 57813, 57842, 57872, 57901, 57930, 57960, 57989,
    58018, 58048, 58078, 58108, 58137, 58167, 58197, 58226, 58256, 58285, 58314, 58344,
    58373, 58402, 58432, 58462, 58491, 58521, 58551, 58581, 58610, 58640, 58669, 58698,
    58728, 58757, 58786, 58816, 58846, 58875, 58905, 58935, 58964, 58994, 59024, 59053,
    59082, 59112, 59141, 59170, 59200, 59229, 59259, 59289, 59318, 59348, 59378, 59407,
    59437, 59466, 59496, 59525, 59555, 59584, 59614, 59643, 59673, 59702, 59732, 59762,
    59791, 59821, 59850, 59880, 59909, 59939, 59968, 59998, 60027, 60057, 60086, 60116,
    60145, 60175, 60205, 60234, 60264, 60293, 60323, 60352, 60382, 60411, 60441, 60470,
    60499, 60529, 60559, 60588, 60618, 60648, 60677, 60707, 60736, 60766, 60795, 60824,
    60854, 60883, 60913, 60942, 60972, 61002, 61031, 61061, 61091, 61120, 61149, 61179,
    61208, 61238, 61267, 61297, 61326, 61356, 61385, 61415, 61445, 61475, 61505, 61534,
    61563, 61593, 61622, 61651, 61681, 61710, 61740, 61769, 61799, 61829, 61859, 61888,
    61918, 61947, 61977, 62006, 62035, 62065, 62094, 62124, 62153, 62183, 62213, 62242,
    62272, 62302, 62331, 62361, 62390, 62419, 62449, 62478, 62508, 62537, 62567, 62596,
    62626, 62656, 62685, 62715, 62745, 62774, 62803, 62833, 62862, 62892, 62921, 62951,
    62980, 63010, 63039, 63069, 63099, 63128, 63158, 63187, 63217, 63246, 63276, 63305,
    63335, 63364, 63394, 63423, 63453, 63483, 63512, 63542, 63571, 63601, 63630, 63660,
    63689,
];

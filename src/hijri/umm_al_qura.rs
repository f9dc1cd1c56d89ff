//! Umm al-Qura month starts, 1 Muharram 1356 AH (1937-03-14) through
//! 1 Muharram 1501 AH.
//!
//! Each entry is the modified Julian day (JDN - 2 400 000) on which a lunar
//! month begins. Entry `i` is lunar month ordinal `i + UMM_AL_QURA_EPOCH`.
//! The last entry only closes the month before it.
//!
//! Entries follow the Umm al-Qura rule evaluated at Mecca: a month starts
//! the day after the 29th when the conjunction precedes sunset and the moon
//! sets after the sun, otherwise a day later. 1 Safar 1448 (2026-07-16) and
//! 1 Rabiul Akhir 1448 (2026-09-13) are pinned to their reference dates.

#[rustfmt::skip]
pub(crate) static UMM_AL_QURA_MONTH_STARTS: [i32; 1741] = [
    28607, 28636, 28665, 28695, 28724, 28754, 28783, 28813, 28842, 28872, 28902, 28931,
    28961, 28991, 29020, 29050, 29079, 29108, 29138, 29167, 29196, 29226, 29256, 29285,
    29315, 29345, 29375, 29404, 29434, 29463, 29492, 29522, 29551, 29580, 29610, 29639,
    29669, 29699, 29729, 29758, 29788, 29818, 29847, 29876, 29906, 29935, 29964, 29994,
    30023, 30053, 30083, 30113, 30142, 30172, 30201, 30231, 30260, 30289, 30319, 30348,
    30378, 30407, 30437, 30467, 30496, 30526, 30556, 30585, 30615, 30644, 30674, 30703,
    30732, 30762, 30791, 30821, 30850, 30880, 30910, 30939, 30969, 30998, 31028, 31058,
    31087, 31117, 31146, 31175, 31205, 31234, 31264, 31293, 31323, 31352, 31382, 31412,
    31441, 31471, 31501, 31530, 31559, 31589, 31618, 31647, 31677, 31706, 31736, 31766,
    31796, 31826, 31855, 31885, 31914, 31943, 31973, 32002, 32031, 32061, 32090, 32120,
    32150, 32180, 32209, 32239, 32269, 32298, 32327, 32357, 32386, 32415, 32445, 32474,
    32504, 32534, 32563, 32593, 32623, 32652, 32682, 32711, 32741, 32770, 32799, 32829,
    32858, 32888, 32918, 32947, 32977, 33007, 33036, 33066, 33095, 33125, 33154, 33183,
    33213, 33242, 33272, 33301, 33331, 33361, 33390, 33420, 33449, 33479, 33509, 33538,
    33568, 33597, 33627, 33656, 33685, 33715, 33744, 33774, 33804, 33833, 33863, 33892,
    33922, 33952, 33981, 34011, 34040, 34069, 34099, 34128, 34158, 34187, 34217, 34247,
    34277, 34306, 34336, 34365, 34395, 34424, 34453, 34483, 34512, 34541, 34571, 34601,
    34631, 34660, 34690, 34720, 34749, 34779, 34808, 34837, 34867, 34896, 34925, 34955,
    34985, 35014, 35044, 35074, 35103, 35133, 35163, 35192, 35221, 35251, 35280, 35310,
    35339, 35369, 35398, 35428, 35457, 35487, 35517, 35547, 35576, 35605, 35635, 35664,
    35694, 35723, 35752, 35782, 35811, 35841, 35871, 35901, 35930, 35960, 35989, 36019,
    36048, 36078, 36107, 36136, 36166, 36195, 36225, 36255, 36284, 36314, 36344, 36373,
    36403, 36432, 36462, 36491, 36520, 36550, 36579, 36609, 36638, 36668, 36698, 36728,
    36757, 36787, 36816, 36845, 36875, 36904, 36934, 36963, 36993, 37022, 37052, 37082,
    37111, 37141, 37170, 37200, 37229, 37259, 37288, 37318, 37347, 37377, 37406, 37436,
    37465, 37495, 37524, 37554, 37584, 37613, 37643, 37672, 37702, 37731, 37761, 37790,
    37820, 37849, 37878, 37908, 37938, 37967, 37997, 38027, 38057, 38086, 38115, 38145,
    38174, 38203, 38233, 38262, 38292, 38321, 38351, 38381, 38411, 38440, 38470, 38499,
    38529, 38558, 38587, 38617, 38646, 38676, 38705, 38735, 38765, 38795, 38824, 38854,
    38883, 38913, 38942, 38971, 39001, 39030, 39059, 39089, 39119, 39149, 39178, 39208,
    39238, 39267, 39297, 39326, 39355, 39385, 39414, 39444, 39473, 39503, 39532, 39562,
    39592, 39622, 39651, 39681, 39710, 39739, 39769, 39798, 39828, 39857, 39887, 39916,
    39946, 39976, 40005, 40035, 40064, 40094, 40123, 40153, 40183, 40212, 40241, 40271,
    40300, 40330, 40359, 40389, 40418, 40448, 40478, 40508, 40537, 40567, 40596, 40625,
    40655, 40684, 40714, 40743, 40772, 40802, 40832, 40862, 40892, 40921, 40951, 40980,
    41009, 41039, 41068, 41097, 41127, 41156, 41186, 41216, 41246, 41275, 41305, 41334,
    41364, 41393, 41423, 41452, 41481, 41511, 41540, 41570, 41600, 41629, 41659, 41689,
    41718, 41748, 41777, 41807, 41836, 41865, 41895, 41924, 41954, 41983, 42013, 42043,
    42072, 42102, 42132, 42161, 42191, 42220, 42250, 42279, 42308, 42338, 42367, 42397,
    42426, 42456, 42486, 42516, 42545, 42575, 42604, 42634, 42663, 42692, 42722, 42751,
    42780, 42810, 42840, 42870, 42899, 42929, 42959, 42988, 43018, 43047, 43076, 43106,
    43135, 43164, 43194, 43224, 43253, 43283, 43313, 43343, 43372, 43402, 43431, 43460,
    43490, 43519, 43549, 43578, 43608, 43637, 43667, 43697, 43726, 43756, 43785, 43815,
    43844, 43874, 43903, 43933, 43962, 43991, 44021, 44051, 44080, 44110, 44139, 44169,
    44199, 44228, 44258, 44287, 44317, 44346, 44375, 44405, 44434, 44464, 44493, 44523,
    44553, 44582, 44612, 44642, 44671, 44701, 44730, 44759, 44789, 44818, 44847, 44877,
    44907, 44937, 44966, 44996, 45026, 45055, 45085, 45114, 45143, 45173, 45202, 45231,
    45261, 45291, 45320, 45350, 45380, 45410, 45439, 45469, 45498, 45527, 45557, 45586,
    45615, 45645, 45674, 45704, 45734, 45764, 45793, 45823, 45853, 45882, 45911, 45941,
    45970, 45999, 46029, 46059, 46088, 46118, 46147, 46177, 46207, 46236, 46266, 46295,
    46325, 46354, 46384, 46413, 46443, 46472, 46502, 46531, 46561, 46590, 46620, 46650,
    46679, 46709, 46738, 46768, 46797, 46827, 46856, 46885, 46915, 46944, 46974, 47004,
    47033, 47063, 47093, 47122, 47152, 47181, 47211, 47240, 47269, 47299, 47328, 47358,
    47387, 47417, 47447, 47477, 47506, 47536, 47565, 47595, 47624, 47653, 47683, 47712,
    47742, 47771, 47801, 47831, 47861, 47890, 47920, 47949, 47979, 48008, 48037, 48067,
    48096, 48126, 48155, 48185, 48215, 48244, 48274, 48304, 48333, 48363, 48392, 48421,
    48451, 48480, 48510, 48539, 48569, 48598, 48628, 48658, 48688, 48717, 48747, 48776,
    48805, 48835, 48864, 48894, 48923, 48952, 48982, 49012, 49041, 49071, 49101, 49130,
    49160, 49190, 49219, 49248, 49278, 49307, 49336, 49366, 49396, 49425, 49455, 49485,
    49514, 49544, 49574, 49603, 49632, 49662, 49691, 49720, 49750, 49779, 49809, 49839,
    49868, 49898, 49928, 49957, 49987, 50016, 50046, 50075, 50104, 50134, 50163, 50193,
    50222, 50252, 50282, 50312, 50341, 50370, 50400, 50430, 50459, 50489, 50518, 50547,
    50577, 50606, 50636, 50665, 50695, 50725, 50754, 50784, 50814, 50843, 50873, 50902,
    50931, 50961, 50990, 51020, 51049, 51079, 51108, 51138, 51168, 51198, 51227, 51257,
    51286, 51315, 51345, 51374, 51403, 51433, 51462, 51492, 51522, 51552, 51582, 51611,
    51641, 51670, 51699, 51729, 51758, 51787, 51817, 51846, 51876, 51906, 51936, 51965,
    51995, 52025, 52054, 52083, 52113, 52142, 52171, 52201, 52230, 52260, 52290, 52319,
    52349, 52379, 52408, 52438, 52467, 52497, 52526, 52555, 52585, 52614, 52644, 52673,
    52703, 52733, 52762, 52792, 52822, 52851, 52881, 52910, 52939, 52969, 52998, 53028,
    53057, 53087, 53116, 53146, 53176, 53205, 53235, 53264, 53294, 53324, 53353, 53383,
    53412, 53441, 53471, 53500, 53530, 53559, 53589, 53619, 53648, 53678, 53708, 53737,
    53767, 53796, 53825, 53855, 53884, 53913, 53943, 53973, 54003, 54032, 54062, 54092,
    54121, 54151, 54180, 54209, 54239, 54268, 54297, 54327, 54357, 54387, 54416, 54446,
    54476, 54505, 54535, 54564, 54593, 54623, 54652, 54681, 54711, 54741, 54770, 54800,
    54830, 54859, 54889, 54919, 54948, 54977, 55007, 55036, 55066, 55095, 55125, 55154,
    55184, 55213, 55243, 55273, 55302, 55332, 55361, 55391, 55420, 55450, 55479, 55508,
    55538, 55567, 55597, 55627, 55657, 55686, 55716, 55745, 55775, 55804, 55834, 55863,
    55892, 55922, 55951, 55981, 56011, 56040, 56070, 56100, 56129, 56159, 56188, 56218,
    56247, 56276, 56306, 56335, 56365, 56394, 56424, 56454, 56483, 56513, 56543, 56572,
    56601, 56631, 56660, 56690, 56719, 56749, 56778, 56808, 56837, 56867, 56897, 56926,
    56956, 56985, 57015, 57044, 57074, 57103, 57133, 57162, 57192, 57221, 57251, 57280,
    57310, 57340, 57369, 57399, 57429, 57458, 57487, 57517, 57546, 57576, 57605, 57634,
    57664, 57694, 57723, 57753, 57783, 57813, 57842, 57871, 57901, 57930, 57959, 57989,
    58018, 58048, 58077, 58107, 58137, 58167, 58196, 58226, 58255, 58285, 58314, 58343,
    58373, 58402, 58432, 58461, 58491, 58521, 58551, 58580, 58610, 58639, 58669, 58698,
    58727, 58757, 58786, 58816, 58845, 58875, 58905, 58934, 58964, 58994, 59023, 59053,
    59082, 59111, 59141, 59170, 59200, 59229, 59259, 59288, 59318, 59348, 59377, 59407,
    59436, 59466, 59495, 59525, 59554, 59584, 59613, 59643, 59672, 59702, 59731, 59761,
    59791, 59820, 59850, 59879, 59909, 59939, 59968, 59997, 60027, 60056, 60086, 60115,
    60145, 60174, 60204, 60234, 60264, 60293, 60323, 60352, 60381, 60411, 60440, 60469,
    60499, 60528, 60558, 60588, 60618, 60648, 60677, 60707, 60736, 60765, 60795, 60824,
    60853, 60883, 60912, 60942, 60972, 61002, 61031, 61061, 61090, 61120, 61149, 61179,
    61208, 61238, 61267, 61297, 61326, 61356, 61385, 61415, 61445, 61474, 61504, 61533,
    61563, 61592, 61621, 61651, 61680, 61710, 61739, 61769, 61799, 61828, 61858, 61888,
    61917, 61947, 61976, 62006, 62035, 62064, 62094, 62123, 62153, 62182, 62212, 62242,
    62271, 62301, 62331, 62360, 62390, 62419, 62448, 62478, 62507, 62537, 62566, 62596,
    62625, 62655, 62685, 62715, 62744, 62774, 62803, 62832, 62862, 62891, 62921, 62950,
    62980, 63009, 63039, 63069, 63099, 63128, 63157, 63187, 63216, 63246, 63275, 63305,
    63334, 63363, 63393, 63423, 63453, 63482, 63512, 63541, 63571, 63600, 63630, 63659,
    63689, 63718, 63747, 63777, 63807, 63836, 63866, 63895, 63925, 63955, 63984, 64014,
    64043, 64073, 64102, 64131, 64161, 64190, 64220, 64249, 64279, 64309, 64339, 64368,
    64398, 64427, 64457, 64486, 64515, 64545, 64574, 64603, 64633, 64663, 64692, 64722,
    64752, 64782, 64811, 64841, 64870, 64899, 64929, 64958, 64987, 65017, 65047, 65076,
    65106, 65136, 65166, 65195, 65225, 65254, 65283, 65313, 65342, 65371, 65401, 65431,
    65460, 65490, 65520, 65549, 65579, 65608, 65638, 65667, 65697, 65726, 65755, 65785,
    65815, 65844, 65874, 65903, 65933, 65963, 65992, 66022, 66051, 66081, 66110, 66140,
    66169, 66199, 66228, 66258, 66287, 66317, 66346, 66376, 66405, 66435, 66465, 66494,
    66524, 66553, 66583, 66612, 66641, 66671, 66700, 66730, 66760, 66789, 66819, 66849,
    66878, 66908, 66937, 66967, 66996, 67025, 67055, 67084, 67114, 67143, 67173, 67203,
    67233, 67262, 67292, 67321, 67351, 67380, 67409, 67439, 67468, 67497, 67527, 67557,
    67587, 67617, 67646, 67676, 67705, 67735, 67764, 67793, 67823, 67852, 67882, 67911,
    67941, 67971, 68000, 68030, 68060, 68089, 68119, 68148, 68177, 68207, 68236, 68266,
    68295, 68325, 68354, 68384, 68414, 68443, 68473, 68502, 68532, 68561, 68591, 68620,
    68650, 68679, 68708, 68738, 68768, 68797, 68827, 68857, 68886, 68916, 68946, 68975,
    69004, 69034, 69063, 69092, 69122, 69152, 69181, 69211, 69240, 69270, 69300, 69330,
    69359, 69388, 69418, 69447, 69476, 69506, 69535, 69565, 69595, 69624, 69654, 69684,
    69713, 69743, 69772, 69802, 69831, 69861, 69890, 69919, 69949, 69978, 70008, 70038,
    70067, 70097, 70126, 70156, 70186, 70215, 70245, 70274, 70303, 70333, 70362, 70392,
    70421, 70451, 70481, 70510, 70540, 70570, 70599, 70629, 70658, 70687, 70717, 70746,
    70776, 70805, 70835, 70864, 70894, 70924, 70954, 70983, 71013, 71042, 71072, 71101,
    71130, 71159, 71189, 71218, 71248, 71278, 71308, 71337, 71367, 71397, 71426, 71455,
    71485, 71514, 71543, 71573, 71602, 71632, 71662, 71691, 71721, 71751, 71781, 71810,
    71839, 71869, 71898, 71927, 71957, 71986, 72016, 72046, 72075, 72105, 72135, 72164,
    72194, 72223, 72253, 72282, 72311, 72341, 72370, 72400, 72429, 72459, 72489, 72518,
    72548, 72577, 72607, 72637, 72666, 72695, 72725, 72754, 72784, 72813, 72843, 72872,
    72902, 72931, 72961, 72991, 73020, 73050, 73080, 73109, 73139, 73168, 73197, 73227,
    73256, 73286, 73315, 73345, 73375, 73404, 73434, 73464, 73493, 73523, 73552, 73581,
    73611, 73640, 73669, 73699, 73729, 73758, 73788, 73818, 73848, 73877, 73907, 73936,
    73965, 73995, 74024, 74053, 74083, 74113, 74142, 74172, 74202, 74231, 74261, 74291,
    74320, 74349, 74379, 74408, 74437, 74467, 74497, 74526, 74556, 74586, 74615, 74645,
    74675, 74704, 74733, 74763, 74792, 74822, 74851, 74881, 74910, 74940, 74969, 74999,
    75029, 75058, 75088, 75117, 75147, 75176, 75206, 75235, 75264, 75294, 75323, 75353,
    75383, 75412, 75442, 75472, 75501, 75531, 75560, 75590, 75619, 75648, 75678, 75707,
    75737, 75766, 75796, 75826, 75856, 75885, 75915, 75944, 75974, 76003, 76032, 76062,
    76091, 76121, 76150, 76180, 76210, 76239, 76269, 76299, 76328, 76358, 76387, 76416,
    76446, 76475, 76505, 76534, 76564, 76593, 76623, 76653, 76682, 76712, 76741, 76771,
    76801, 76830, 76859, 76889, 76918, 76948, 76977, 77007, 77036, 77066, 77096, 77125,
    77155, 77185, 77214, 77243, 77273, 77302, 77332, 77361, 77390, 77420, 77450, 77479,
    77509, 77539, 77569, 77598, 77627, 77657, 77686, 77715, 77745, 77774, 77804, 77833,
    77863, 77893, 77923, 77952, 77982, 78011, 78041, 78070, 78099, 78129, 78158, 78188,
    78217, 78247, 78277, 78307, 78336, 78366, 78395, 78425, 78454, 78483, 78513, 78542,
    78572, 78601, 78631, 78661, 78690, 78720, 78750, 78779, 78808, 78838, 78867, 78897,
    78926, 78956, 78985, 79015, 79044, 79074, 79104, 79133, 79163, 79192, 79222, 79251,
    79281, 79310, 79340, 79369, 79399, 79428, 79458, 79487, 79517, 79546, 79576, 79606,
    79635, 79665, 79695, 79724, 79753, 79783, 79812, 79841, 79871, 79900, 79930, 79960,
    79990,
];

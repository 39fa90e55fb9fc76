//! Trigonometry Lookup Tables
//!
//! Generated offline, stored as raw Q48.16 integers so the tables are part
//! of the deterministic contract. Do not edit by hand.

/// Entries per table segment (table length is `SEGMENTS + 1`).
pub(crate) const SEGMENTS: usize = 1024;

/// `SIN_TABLE[i] = round(sin(i / 1024 * π/2) * 65536)`
pub(crate) static SIN_TABLE: [i64; 1025] = [
    0, 101, 201, 302, 402, 503, 603, 704, 804, 905, 1005, 1106, 1206, 1307, 1407, 1508, 1608, 1709,
    1809, 1910, 2010, 2111, 2211, 2312, 2412, 2513, 2613, 2714, 2814, 2914, 3015, 3115, 3216, 3316,
    3417, 3517, 3617, 3718, 3818, 3918, 4019, 4119, 4219, 4320, 4420, 4520, 4621, 4721, 4821, 4921,
    5022, 5122, 5222, 5322, 5422, 5523, 5623, 5723, 5823, 5923, 6023, 6123, 6224, 6324, 6424, 6524,
    6624, 6724, 6824, 6924, 7024, 7124, 7224, 7323, 7423, 7523, 7623, 7723, 7823, 7923, 8022, 8122,
    8222, 8322, 8421, 8521, 8621, 8720, 8820, 8919, 9019, 9119, 9218, 9318, 9417, 9517, 9616, 9716,
    9815, 9914, 10014, 10113, 10212, 10312, 10411, 10510, 10609, 10709, 10808, 10907, 11006, 11105,
    11204, 11303, 11402, 11501, 11600, 11699, 11798, 11897, 11996, 12095, 12193, 12292, 12391,
    12490, 12588, 12687, 12785, 12884, 12983, 13081, 13180, 13278, 13376, 13475, 13573, 13672,
    13770, 13868, 13966, 14065, 14163, 14261, 14359, 14457, 14555, 14653, 14751, 14849, 14947,
    15045, 15143, 15240, 15338, 15436, 15534, 15631, 15729, 15826, 15924, 16021, 16119, 16216,
    16314, 16411, 16508, 16606, 16703, 16800, 16897, 16994, 17091, 17188, 17285, 17382, 17479,
    17576, 17673, 17770, 17867, 17963, 18060, 18156, 18253, 18350, 18446, 18543, 18639, 18735,
    18832, 18928, 19024, 19120, 19216, 19313, 19409, 19505, 19600, 19696, 19792, 19888, 19984,
    20080, 20175, 20271, 20366, 20462, 20557, 20653, 20748, 20844, 20939, 21034, 21129, 21224,
    21320, 21415, 21510, 21604, 21699, 21794, 21889, 21984, 22078, 22173, 22268, 22362, 22457,
    22551, 22645, 22740, 22834, 22928, 23022, 23116, 23210, 23304, 23398, 23492, 23586, 23680,
    23774, 23867, 23961, 24054, 24148, 24241, 24335, 24428, 24521, 24614, 24708, 24801, 24894,
    24987, 25080, 25172, 25265, 25358, 25451, 25543, 25636, 25728, 25821, 25913, 26005, 26098,
    26190, 26282, 26374, 26466, 26558, 26650, 26742, 26833, 26925, 27017, 27108, 27200, 27291,
    27382, 27474, 27565, 27656, 27747, 27838, 27929, 28020, 28111, 28202, 28293, 28383, 28474,
    28564, 28655, 28745, 28835, 28926, 29016, 29106, 29196, 29286, 29376, 29466, 29555, 29645,
    29735, 29824, 29914, 30003, 30093, 30182, 30271, 30360, 30449, 30538, 30627, 30716, 30805,
    30893, 30982, 31071, 31159, 31248, 31336, 31424, 31512, 31600, 31688, 31776, 31864, 31952,
    32040, 32127, 32215, 32303, 32390, 32477, 32565, 32652, 32739, 32826, 32913, 33000, 33087,
    33173, 33260, 33347, 33433, 33520, 33606, 33692, 33778, 33865, 33951, 34037, 34122, 34208,
    34294, 34380, 34465, 34551, 34636, 34721, 34806, 34892, 34977, 35062, 35146, 35231, 35316,
    35401, 35485, 35570, 35654, 35738, 35823, 35907, 35991, 36075, 36159, 36243, 36326, 36410,
    36493, 36577, 36660, 36744, 36827, 36910, 36993, 37076, 37159, 37241, 37324, 37407, 37489,
    37572, 37654, 37736, 37818, 37900, 37982, 38064, 38146, 38228, 38309, 38391, 38472, 38554,
    38635, 38716, 38797, 38878, 38959, 39040, 39120, 39201, 39282, 39362, 39442, 39523, 39603,
    39683, 39763, 39843, 39922, 40002, 40082, 40161, 40241, 40320, 40399, 40478, 40557, 40636,
    40715, 40794, 40872, 40951, 41029, 41108, 41186, 41264, 41342, 41420, 41498, 41576, 41653,
    41731, 41808, 41886, 41963, 42040, 42117, 42194, 42271, 42348, 42424, 42501, 42578, 42654,
    42730, 42806, 42882, 42958, 43034, 43110, 43186, 43261, 43337, 43412, 43487, 43562, 43638,
    43713, 43787, 43862, 43937, 44011, 44086, 44160, 44234, 44308, 44382, 44456, 44530, 44604,
    44677, 44751, 44824, 44898, 44971, 45044, 45117, 45190, 45262, 45335, 45408, 45480, 45552,
    45625, 45697, 45769, 45841, 45912, 45984, 46056, 46127, 46199, 46270, 46341, 46412, 46483,
    46554, 46624, 46695, 46765, 46836, 46906, 46976, 47046, 47116, 47186, 47256, 47325, 47395,
    47464, 47534, 47603, 47672, 47741, 47809, 47878, 47947, 48015, 48084, 48152, 48220, 48288,
    48356, 48424, 48491, 48559, 48626, 48694, 48761, 48828, 48895, 48962, 49029, 49095, 49162,
    49228, 49295, 49361, 49427, 49493, 49559, 49624, 49690, 49756, 49821, 49886, 49951, 50016,
    50081, 50146, 50211, 50275, 50340, 50404, 50468, 50532, 50596, 50660, 50724, 50787, 50851,
    50914, 50977, 51041, 51104, 51166, 51229, 51292, 51354, 51417, 51479, 51541, 51603, 51665,
    51727, 51789, 51850, 51911, 51973, 52034, 52095, 52156, 52217, 52277, 52338, 52398, 52459,
    52519, 52579, 52639, 52699, 52759, 52818, 52878, 52937, 52996, 53055, 53114, 53173, 53232,
    53290, 53349, 53407, 53465, 53523, 53581, 53639, 53697, 53754, 53812, 53869, 53926, 53983,
    54040, 54097, 54154, 54210, 54267, 54323, 54379, 54435, 54491, 54547, 54603, 54658, 54714,
    54769, 54824, 54879, 54934, 54989, 55043, 55098, 55152, 55206, 55260, 55314, 55368, 55422,
    55476, 55529, 55582, 55636, 55689, 55742, 55794, 55847, 55900, 55952, 56004, 56056, 56108,
    56160, 56212, 56264, 56315, 56367, 56418, 56469, 56520, 56571, 56621, 56672, 56722, 56773,
    56823, 56873, 56923, 56972, 57022, 57072, 57121, 57170, 57219, 57268, 57317, 57366, 57414,
    57463, 57511, 57559, 57607, 57655, 57703, 57750, 57798, 57845, 57892, 57939, 57986, 58033,
    58079, 58126, 58172, 58219, 58265, 58311, 58356, 58402, 58448, 58493, 58538, 58583, 58628,
    58673, 58718, 58763, 58807, 58851, 58896, 58940, 58983, 59027, 59071, 59114, 59158, 59201,
    59244, 59287, 59330, 59372, 59415, 59457, 59499, 59541, 59583, 59625, 59667, 59708, 59750,
    59791, 59832, 59873, 59914, 59954, 59995, 60035, 60075, 60116, 60156, 60195, 60235, 60275,
    60314, 60353, 60392, 60431, 60470, 60509, 60547, 60586, 60624, 60662, 60700, 60738, 60776,
    60813, 60851, 60888, 60925, 60962, 60999, 61035, 61072, 61108, 61145, 61181, 61217, 61253,
    61288, 61324, 61359, 61394, 61429, 61464, 61499, 61534, 61568, 61603, 61637, 61671, 61705,
    61739, 61772, 61806, 61839, 61873, 61906, 61939, 61971, 62004, 62036, 62069, 62101, 62133,
    62165, 62197, 62228, 62260, 62291, 62322, 62353, 62384, 62415, 62445, 62476, 62506, 62536,
    62566, 62596, 62626, 62655, 62685, 62714, 62743, 62772, 62801, 62830, 62858, 62886, 62915,
    62943, 62971, 62998, 63026, 63054, 63081, 63108, 63135, 63162, 63189, 63215, 63242, 63268,
    63294, 63320, 63346, 63372, 63397, 63423, 63448, 63473, 63498, 63523, 63547, 63572, 63596,
    63621, 63645, 63668, 63692, 63716, 63739, 63763, 63786, 63809, 63832, 63854, 63877, 63899,
    63922, 63944, 63966, 63987, 64009, 64031, 64052, 64073, 64094, 64115, 64136, 64156, 64177,
    64197, 64217, 64237, 64257, 64277, 64296, 64316, 64335, 64354, 64373, 64392, 64410, 64429,
    64447, 64465, 64483, 64501, 64519, 64536, 64554, 64571, 64588, 64605, 64622, 64639, 64655,
    64672, 64688, 64704, 64720, 64735, 64751, 64766, 64782, 64797, 64812, 64827, 64841, 64856,
    64870, 64884, 64899, 64912, 64926, 64940, 64953, 64967, 64980, 64993, 65006, 65018, 65031,
    65043, 65055, 65067, 65079, 65091, 65103, 65114, 65126, 65137, 65148, 65159, 65169, 65180,
    65190, 65200, 65210, 65220, 65230, 65240, 65249, 65259, 65268, 65277, 65286, 65294, 65303,
    65311, 65320, 65328, 65336, 65343, 65351, 65358, 65366, 65373, 65380, 65387, 65393, 65400,
    65406, 65413, 65419, 65425, 65430, 65436, 65442, 65447, 65452, 65457, 65462, 65467, 65471,
    65476, 65480, 65484, 65488, 65492, 65495, 65499, 65502, 65505, 65508, 65511, 65514, 65516,
    65519, 65521, 65523, 65525, 65527, 65528, 65530, 65531, 65532, 65533, 65534, 65535, 65535,
    65536, 65536, 65536,
];

/// `ATAN_TABLE[i] = round(atan(i / 1024) * 65536)`
pub(crate) static ATAN_TABLE: [i64; 1025] = [
    0, 64, 128, 192, 256, 320, 384, 448, 512, 576, 640, 704, 768, 832, 896, 960, 1024, 1088, 1152,
    1216, 1280, 1344, 1408, 1472, 1536, 1600, 1664, 1728, 1792, 1856, 1919, 1983, 2047, 2111, 2175,
    2239, 2303, 2367, 2431, 2495, 2559, 2623, 2686, 2750, 2814, 2878, 2942, 3006, 3070, 3134, 3197,
    3261, 3325, 3389, 3453, 3517, 3580, 3644, 3708, 3772, 3836, 3899, 3963, 4027, 4091, 4154, 4218,
    4282, 4346, 4409, 4473, 4537, 4600, 4664, 4728, 4791, 4855, 4919, 4982, 5046, 5110, 5173, 5237,
    5300, 5364, 5428, 5491, 5555, 5618, 5682, 5745, 5809, 5872, 5936, 5999, 6063, 6126, 6190, 6253,
    6316, 6380, 6443, 6507, 6570, 6633, 6697, 6760, 6823, 6887, 6950, 7013, 7076, 7140, 7203, 7266,
    7329, 7392, 7456, 7519, 7582, 7645, 7708, 7771, 7834, 7898, 7961, 8024, 8087, 8150, 8213, 8276,
    8339, 8402, 8465, 8528, 8590, 8653, 8716, 8779, 8842, 8905, 8968, 9030, 9093, 9156, 9219, 9281,
    9344, 9407, 9470, 9532, 9595, 9657, 9720, 9783, 9845, 9908, 9970, 10033, 10095, 10158, 10220,
    10283, 10345, 10408, 10470, 10532, 10595, 10657, 10719, 10782, 10844, 10906, 10968, 11031,
    11093, 11155, 11217, 11279, 11341, 11403, 11466, 11528, 11590, 11652, 11714, 11776, 11838,
    11899, 11961, 12023, 12085, 12147, 12209, 12271, 12332, 12394, 12456, 12518, 12579, 12641,
    12703, 12764, 12826, 12887, 12949, 13010, 13072, 13133, 13195, 13256, 13318, 13379, 13440,
    13502, 13563, 13624, 13686, 13747, 13808, 13869, 13930, 13991, 14053, 14114, 14175, 14236,
    14297, 14358, 14419, 14480, 14541, 14601, 14662, 14723, 14784, 14845, 14906, 14966, 15027,
    15088, 15148, 15209, 15270, 15330, 15391, 15451, 15512, 15572, 15633, 15693, 15753, 15814,
    15874, 15934, 15995, 16055, 16115, 16175, 16236, 16296, 16356, 16416, 16476, 16536, 16596,
    16656, 16716, 16776, 16836, 16895, 16955, 17015, 17075, 17135, 17194, 17254, 17314, 17373,
    17433, 17492, 17552, 17611, 17671, 17730, 17790, 17849, 17909, 17968, 18027, 18086, 18146,
    18205, 18264, 18323, 18382, 18441, 18500, 18559, 18618, 18677, 18736, 18795, 18854, 18913,
    18972, 19030, 19089, 19148, 19207, 19265, 19324, 19382, 19441, 19499, 19558, 19616, 19675,
    19733, 19792, 19850, 19908, 19966, 20025, 20083, 20141, 20199, 20257, 20315, 20373, 20431,
    20489, 20547, 20605, 20663, 20721, 20779, 20836, 20894, 20952, 21009, 21067, 21125, 21182,
    21240, 21297, 21355, 21412, 21469, 21527, 21584, 21641, 21699, 21756, 21813, 21870, 21927,
    21984, 22042, 22099, 22156, 22212, 22269, 22326, 22383, 22440, 22497, 22553, 22610, 22667,
    22723, 22780, 22836, 22893, 22950, 23006, 23062, 23119, 23175, 23231, 23288, 23344, 23400,
    23456, 23512, 23568, 23625, 23681, 23737, 23792, 23848, 23904, 23960, 24016, 24072, 24127,
    24183, 24239, 24294, 24350, 24406, 24461, 24516, 24572, 24627, 24683, 24738, 24793, 24849,
    24904, 24959, 25014, 25069, 25124, 25179, 25234, 25289, 25344, 25399, 25454, 25509, 25563,
    25618, 25673, 25727, 25782, 25837, 25891, 25946, 26000, 26055, 26109, 26163, 26218, 26272,
    26326, 26380, 26435, 26489, 26543, 26597, 26651, 26705, 26759, 26813, 26866, 26920, 26974,
    27028, 27081, 27135, 27189, 27242, 27296, 27349, 27403, 27456, 27510, 27563, 27616, 27670,
    27723, 27776, 27829, 27882, 27935, 27988, 28041, 28094, 28147, 28200, 28253, 28306, 28359,
    28411, 28464, 28517, 28569, 28622, 28674, 28727, 28779, 28832, 28884, 28936, 28989, 29041,
    29093, 29145, 29197, 29250, 29302, 29354, 29406, 29458, 29509, 29561, 29613, 29665, 29717,
    29768, 29820, 29872, 29923, 29975, 30026, 30078, 30129, 30180, 30232, 30283, 30334, 30386,
    30437, 30488, 30539, 30590, 30641, 30692, 30743, 30794, 30845, 30896, 30946, 30997, 31048,
    31098, 31149, 31200, 31250, 31301, 31351, 31402, 31452, 31502, 31553, 31603, 31653, 31703,
    31753, 31803, 31854, 31904, 31954, 32003, 32053, 32103, 32153, 32203, 32253, 32302, 32352,
    32401, 32451, 32501, 32550, 32600, 32649, 32698, 32748, 32797, 32846, 32895, 32945, 32994,
    33043, 33092, 33141, 33190, 33239, 33288, 33336, 33385, 33434, 33483, 33531, 33580, 33629,
    33677, 33726, 33774, 33823, 33871, 33919, 33968, 34016, 34064, 34112, 34160, 34209, 34257,
    34305, 34353, 34401, 34448, 34496, 34544, 34592, 34640, 34687, 34735, 34783, 34830, 34878,
    34925, 34973, 35020, 35068, 35115, 35162, 35209, 35257, 35304, 35351, 35398, 35445, 35492,
    35539, 35586, 35633, 35680, 35727, 35773, 35820, 35867, 35913, 35960, 36007, 36053, 36100,
    36146, 36193, 36239, 36285, 36332, 36378, 36424, 36470, 36516, 36562, 36608, 36654, 36700,
    36746, 36792, 36838, 36884, 36930, 36975, 37021, 37067, 37112, 37158, 37203, 37249, 37294,
    37340, 37385, 37430, 37476, 37521, 37566, 37611, 37656, 37701, 37746, 37791, 37836, 37881,
    37926, 37971, 38016, 38060, 38105, 38150, 38194, 38239, 38284, 38328, 38373, 38417, 38461,
    38506, 38550, 38594, 38639, 38683, 38727, 38771, 38815, 38859, 38903, 38947, 38991, 39035,
    39079, 39123, 39166, 39210, 39254, 39297, 39341, 39385, 39428, 39472, 39515, 39558, 39602,
    39645, 39688, 39732, 39775, 39818, 39861, 39904, 39947, 39990, 40033, 40076, 40119, 40162,
    40205, 40247, 40290, 40333, 40375, 40418, 40461, 40503, 40546, 40588, 40631, 40673, 40715,
    40758, 40800, 40842, 40884, 40926, 40968, 41010, 41053, 41094, 41136, 41178, 41220, 41262,
    41304, 41346, 41387, 41429, 41471, 41512, 41554, 41595, 41637, 41678, 41720, 41761, 41802,
    41844, 41885, 41926, 41967, 42008, 42049, 42090, 42132, 42172, 42213, 42254, 42295, 42336,
    42377, 42418, 42458, 42499, 42540, 42580, 42621, 42661, 42702, 42742, 42783, 42823, 42863,
    42904, 42944, 42984, 43024, 43064, 43104, 43145, 43185, 43225, 43264, 43304, 43344, 43384,
    43424, 43464, 43503, 43543, 43583, 43622, 43662, 43701, 43741, 43780, 43820, 43859, 43899,
    43938, 43977, 44016, 44056, 44095, 44134, 44173, 44212, 44251, 44290, 44329, 44368, 44407,
    44446, 44484, 44523, 44562, 44600, 44639, 44678, 44716, 44755, 44793, 44832, 44870, 44909,
    44947, 44985, 45024, 45062, 45100, 45138, 45176, 45214, 45252, 45290, 45328, 45366, 45404,
    45442, 45480, 45518, 45556, 45593, 45631, 45669, 45706, 45744, 45781, 45819, 45856, 45894,
    45931, 45969, 46006, 46043, 46080, 46118, 46155, 46192, 46229, 46266, 46303, 46340, 46377,
    46414, 46451, 46488, 46525, 46562, 46598, 46635, 46672, 46708, 46745, 46782, 46818, 46855,
    46891, 46928, 46964, 47000, 47037, 47073, 47109, 47145, 47182, 47218, 47254, 47290, 47326,
    47362, 47398, 47434, 47470, 47506, 47542, 47578, 47613, 47649, 47685, 47720, 47756, 47792,
    47827, 47863, 47898, 47934, 47969, 48005, 48040, 48075, 48111, 48146, 48181, 48216, 48251,
    48286, 48322, 48357, 48392, 48427, 48462, 48497, 48531, 48566, 48601, 48636, 48671, 48705,
    48740, 48775, 48809, 48844, 48878, 48913, 48947, 48982, 49016, 49051, 49085, 49119, 49154,
    49188, 49222, 49256, 49290, 49324, 49359, 49393, 49427, 49461, 49495, 49528, 49562, 49596,
    49630, 49664, 49697, 49731, 49765, 49799, 49832, 49866, 49899, 49933, 49966, 50000, 50033,
    50067, 50100, 50133, 50167, 50200, 50233, 50266, 50299, 50332, 50366, 50399, 50432, 50465,
    50498, 50531, 50563, 50596, 50629, 50662, 50695, 50728, 50760, 50793, 50826, 50858, 50891,
    50923, 50956, 50988, 51021, 51053, 51086, 51118, 51150, 51183, 51215, 51247, 51279, 51311,
    51344, 51376, 51408, 51440, 51472,
];

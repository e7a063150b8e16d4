//! Literal filter tap tables for the wavelet catalog.
//!
//! Orthogonal tables hold the scaling (low-pass) decomposition filter;
//! the high-pass and reconstruction filters are derived in `wavelet.rs`.
//! Biorthogonal spline tables hold both low-pass filters, zero-padded to a
//! common even length so the quadrature relations apply uniformly.

#![allow(clippy::excessive_precision)]

/// Haar scaling filter (db1).
pub(crate) const HAAR: [f64; 2] = [
    0.7071067811865476,
    0.7071067811865476,
];

pub(crate) const DB2: [f64; 4] = [
    0.48296291314453416,
    0.8365163037378079,
    0.2241438680420134,
    -0.12940952255126037,
];

pub(crate) const DB3: [f64; 6] = [
    0.33267055295008263,
    0.8068915093110925,
    0.45987750211849154,
    -0.13501102001025458,
    -0.08544127388202666,
    0.03522629188570953,
];

pub(crate) const DB4: [f64; 8] = [
    0.2303778133088965,
    0.7148465705529157,
    0.6308807679298589,
    -0.027983769416859854,
    -0.18703481171909309,
    0.030841381835560764,
    0.0328830116668852,
    -0.010597401785069032,
];

pub(crate) const DB5: [f64; 10] = [
    0.16010239797419293,
    0.6038292697971896,
    0.7243085284377729,
    0.13842814590132074,
    -0.24229488706638203,
    -0.032244869584638375,
    0.07757149384004572,
    -0.006241490212798274,
    -0.012580751999081999,
    0.0033357252854737712,
];

pub(crate) const DB6: [f64; 12] = [
    0.11154074335010947,
    0.49462389039845306,
    0.7511339080210954,
    0.31525035170919763,
    -0.22626469396543983,
    -0.12976686756726194,
    0.09750160558732304,
    0.027522865530305727,
    -0.03158203931748603,
    0.0005538422011614961,
    0.004777257510945511,
    -0.0010773010853084796,
];

pub(crate) const DB7: [f64; 14] = [
    0.07785205408500918,
    0.3965393194819173,
    0.7291320908462351,
    0.4697822874051931,
    -0.14390600392856498,
    -0.22403618499387498,
    0.07130921926683026,
    0.08061260915108308,
    -0.03802993693501441,
    -0.01657454163066688,
    0.01255099855609984,
    0.0004295779729213665,
    -0.0018016407040474908,
    0.00035371379997452024,
];

pub(crate) const DB8: [f64; 16] = [
    0.05441584224310401,
    0.31287159091429995,
    0.6756307362972898,
    0.5853546836542067,
    -0.015829105256349306,
    -0.2840155429615469,
    0.0004724845739132828,
    0.12874742662047847,
    -0.017369301001807547,
    -0.044088253930794755,
    0.013981027917398282,
    0.008746094047405777,
    -0.004870352993451574,
    -0.00039174037337694705,
    0.0006754494064505693,
    -0.00011747678412476953,
];

pub(crate) const DB9: [f64; 18] = [
    0.038077947363878345,
    0.24383467461259034,
    0.6048231236901112,
    0.6572880780513005,
    0.13319738582500756,
    -0.2932737832791749,
    -0.09684078322297646,
    0.14854074933810638,
    0.03072568147933338,
    -0.06763282906132997,
    0.00025094711483145197,
    0.022361662123679096,
    -0.004723204757751397,
    -0.00428150368246343,
    0.0018476468830562265,
    0.00023038576352319597,
    -0.0002519631889427101,
    3.93473203162716e-05,
];

pub(crate) const DB10: [f64; 20] = [
    0.026670057900555554,
    0.1881768000776915,
    0.5272011889317256,
    0.6884590394536035,
    0.2811723436605775,
    -0.24984642432731538,
    -0.19594627437737705,
    0.12736934033579325,
    0.09305736460357235,
    -0.07139414716639708,
    -0.029457536821875813,
    0.033212674059341,
    0.0036065535669561697,
    -0.010733175483330575,
    0.001395351747052901,
    0.001992405295185056,
    -0.0006858566949597116,
    -0.00011646685512928545,
    9.358867032006959e-05,
    -1.3264202894521244e-05,
];

pub(crate) const DB11: [f64; 22] = [
    0.018694297761471083,
    0.1440670211506245,
    0.44989976435604534,
    0.6856867749162006,
    0.41196436894790744,
    -0.16227524502749036,
    -0.27423084681794696,
    0.0660435881966832,
    0.14981201246637849,
    -0.046479955116684187,
    -0.0664387856950252,
    0.031335090219046076,
    0.020840904360181062,
    -0.0153648209062016,
    -0.0033408588730144454,
    0.004928417656059041,
    -0.0003085928588151432,
    -0.0008930232506662646,
    0.0002491525235528235,
    5.4439074699368475e-05,
    -3.4634984186984996e-05,
    4.49427427723651e-06,
];

pub(crate) const DB12: [f64; 24] = [
    0.013112257957229518,
    0.10956627282118515,
    0.37735513521421266,
    0.6571987225793071,
    0.5158864784278157,
    -0.04476388565377463,
    -0.3161784537527855,
    -0.023779257256069726,
    0.18247860592757967,
    0.00535956967435215,
    -0.09643212009650708,
    0.010849130255822185,
    0.04154627749508444,
    -0.01221864906974828,
    -0.012840825198300683,
    0.00671149900879551,
    0.0022486072409952378,
    -0.0021795036186277603,
    6.545128212509596e-06,
    0.00038865306282093143,
    -8.850410920820432e-05,
    -2.4241545757030785e-05,
    1.2776952219379767e-05,
    -1.529071758068511e-06,
];

pub(crate) const DB13: [f64; 26] = [
    0.009202133538962367,
    0.08286124387290278,
    0.31199632216043804,
    0.6110558511587877,
    0.5888895704312189,
    0.08698572617964724,
    -0.31497290771138864,
    -0.12457673075081525,
    0.17947607942933985,
    0.07294893365677717,
    -0.10580761818793433,
    -0.026488406475343694,
    0.05613947710028343,
    0.0023799722540590786,
    -0.02383142071032365,
    0.003923941448797416,
    0.007255589401617566,
    -0.0027619112346568622,
    -0.001315673911892299,
    0.0009323261308672633,
    4.9251525126289464e-05,
    -0.0001651289885565055,
    3.0678537579325496e-05,
    1.0441930571408138e-05,
    -4.700416479360868e-06,
    5.220035098454864e-07,
];

pub(crate) const DB14: [f64; 28] = [
    0.006461153460087948,
    0.0623647588493989,
    0.2548502677926214,
    0.5543056179408938,
    0.6311878491048568,
    0.21867068775890652,
    -0.27168855227874805,
    -0.21803352999327605,
    0.1383952138648066,
    0.1399890165844607,
    -0.08674841156816969,
    -0.07154895550404614,
    0.05523712625921604,
    0.026981408307912916,
    -0.030185351540390634,
    -0.005615049530356959,
    0.01278949326633341,
    -0.000746218989268385,
    -0.0038496388680221874,
    0.001061691085606762,
    0.0007080211542355279,
    -0.0003868319473129545,
    -4.1777245770372596e-05,
    6.87550425269751e-05,
    -1.0337209184570774e-05,
    -4.389704901781394e-06,
    1.7249946753678127e-06,
    -1.7871399683113592e-07,
];

pub(crate) const DB15: [f64; 30] = [
    0.004538537361578899,
    0.04674339489276627,
    0.20602386398699574,
    0.4926317717081396,
    0.6458131403574243,
    0.3390025354547315,
    -0.19320413960914543,
    -0.28888259656696563,
    0.06528295284877282,
    0.190146714007123,
    -0.039666176555790945,
    -0.1111209360372317,
    0.033877143923507685,
    0.05478055058450761,
    -0.025767007328439964,
    -0.020810050169693083,
    0.015083918027835902,
    0.005101000360407543,
    -0.006487734560315745,
    -0.00024175649076162427,
    0.0019433239803822114,
    -0.000373482354137617,
    -0.0003595652443624688,
    0.00015589648992059973,
    2.5792699155318936e-05,
    -2.8133296266047814e-05,
    3.36298718173758e-06,
    1.8112704079405772e-06,
    -6.316882325881664e-07,
    6.133359913305752e-08,
];

pub(crate) const DB16: [f64; 32] = [
    0.003189220925347738,
    0.034907714323673344,
    0.16506428348885313,
    0.4303127228460038,
    0.637356332083789,
    0.4402902568863569,
    -0.08975108940248964,
    -0.3270633105279177,
    -0.027918208133028276,
    0.2111906939471043,
    0.027340263752716042,
    -0.1323883055638104,
    -0.006239722752474872,
    0.07592423604427631,
    -0.007588974368857738,
    -0.03688839769173014,
    0.01029765964095597,
    0.013993768859828731,
    -0.006990014563413916,
    -0.00364427962149839,
    0.003128023381206269,
    0.00040789698084971285,
    -0.0009410217493595676,
    0.00011424152003872239,
    0.00017478724522533817,
    -6.103596621410936e-05,
    -1.3945668988208893e-05,
    1.1336608661276258e-05,
    -1.0435713423116066e-06,
    -7.363656785451205e-07,
    2.3087840868575457e-07,
    -2.109339630100743e-08,
];

pub(crate) const DB17: [f64; 34] = [
    0.0022418070010373128,
    0.025985393703606044,
    0.1312149033078244,
    0.37035072415264114,
    0.6109966156846228,
    0.5183157640569378,
    0.027314970403293636,
    -0.32832074836396175,
    -0.1265997522158827,
    0.197310589565011,
    0.10113548917747027,
    -0.1268156917782863,
    -0.05709141963167693,
    0.08110598665416088,
    0.022312336178103798,
    -0.04692243838926974,
    -0.0032709555358192938,
    0.02273367658394627,
    -0.003042989981354637,
    -0.008602921520322855,
    0.0029679966915260947,
    0.0023012052421535457,
    -0.0014368453048029762,
    -0.00032813251940983797,
    0.0004394654277686437,
    -2.5610109566548458e-05,
    -8.204803202453391e-05,
    2.3186813798745952e-05,
    6.9906009850767515e-06,
    -4.505942477222988e-06,
    3.0165496099945573e-07,
    2.957700933316857e-07,
    -8.42394844600268e-08,
    7.2674929685616085e-09,
];

pub(crate) const DB18: [f64; 36] = [
    0.0015763102184407605,
    0.019288531724146376,
    0.10358846582242359,
    0.3146789413370317,
    0.5718268077666072,
    0.5718016548886513,
    0.14722311196992816,
    -0.29365404073655876,
    -0.21648093400514298,
    0.14953397556537779,
    0.1670813127632574,
    -0.09233188415084628,
    -0.10675224665982849,
    0.06488721621190545,
    0.057051247738536884,
    -0.044526141902982326,
    -0.023733210395860002,
    0.02667070592647059,
    0.006262167954305707,
    -0.013051480946612001,
    0.00011863003385811746,
    0.004943343605466738,
    -0.0011187326669924971,
    -0.0013405962983361066,
    0.0006284656829651457,
    0.0002135815619103407,
    -0.00019864855231174796,
    -1.5359171235347246e-07,
    3.7412378807400385e-05,
    -8.520602537446696e-06,
    -3.332634478885822e-06,
    1.7687129836276155e-06,
    -7.691632689885177e-08,
    -1.1760987670282317e-07,
    3.068835863045175e-08,
    -2.5079344549485983e-09,
];

pub(crate) const DB19: [f64; 38] = [
    0.0011086697631817106,
    0.014281098450764397,
    0.08127811326545956,
    0.26438843174089677,
    0.5244363774646549,
    0.6017045491275379,
    0.26089495265103885,
    -0.22809139421548263,
    -0.28583863175582624,
    0.07465226970810326,
    0.21234974330627848,
    -0.03351854190230288,
    -0.1427856950387366,
    0.027584350625628667,
    0.08690675555581223,
    -0.02650123625012304,
    -0.04567422627723091,
    0.02162376740958505,
    0.019375549889176127,
    -0.013988388678535142,
    -0.005866922281012175,
    0.007040747367105243,
    0.0007689543592575484,
    -0.002687551800701582,
    0.00034180865345859575,
    0.0007358025205054352,
    -0.000260676135678628,
    -0.00012460079173415878,
    8.711270467219923e-05,
    5.105950487073886e-06,
    -1.6640176297154945e-05,
    3.0109643162965265e-06,
    1.531931476691193e-06,
    -6.862755657769143e-07,
    1.4470882987978445e-08,
    4.6369377757826045e-08,
    -1.1164020670358259e-08,
    8.666848838997619e-10,
];

pub(crate) const DB20: [f64; 40] = [
    0.0007799536136668463,
    0.010549394624950399,
    0.06342378045908152,
    0.21994211355139703,
    0.4726961853109017,
    0.6104932389385939,
    0.36150229873933104,
    -0.13921208801148388,
    -0.32678680043403496,
    -0.016727088309077008,
    0.22829105081991632,
    0.0398502464577712,
    -0.15545875070726795,
    -0.024716827338613585,
    0.10229171917444256,
    0.005632246857307436,
    -0.06172289962468046,
    0.005874681811811827,
    0.03229429953076958,
    -0.00878932492390156,
    -0.01381052613715192,
    0.006721627302259457,
    0.004420542387045791,
    -0.0035814942596096226,
    -0.0008315621728225569,
    0.0013925596193231364,
    -5.349759843997695e-05,
    -0.00038510474869921763,
    0.00010153288973670291,
    6.77428082837773e-05,
    -3.710586183394713e-05,
    -4.376143862183997e-06,
    7.2412482876736205e-06,
    -1.0119940100188862e-06,
    -6.847079597000557e-07,
    2.6339242262700013e-07,
    2.0143220235505126e-10,
    -1.814843248299696e-08,
    4.056127055551833e-09,
    -2.9988364896193194e-10,
];

pub(crate) const SYM2: [f64; 4] = [
    -0.12940952255126037,
    0.2241438680420134,
    0.8365163037378079,
    0.48296291314453416,
];

pub(crate) const SYM3: [f64; 6] = [
    0.03522629188570953,
    -0.08544127388202666,
    -0.13501102001025458,
    0.45987750211849154,
    0.8068915093110925,
    0.33267055295008263,
];

pub(crate) const SYM4: [f64; 8] = [
    0.032223100604051466,
    -0.012603967262031304,
    -0.09921954357663353,
    0.29785779560530606,
    0.8037387518051321,
    0.497618667632775,
    -0.029635527646002493,
    -0.07576571478950221,
];

pub(crate) const SYM5: [f64; 10] = [
    0.019538882735249827,
    -0.021101834024689042,
    -0.17532808990805623,
    0.01660210576451085,
    0.633978963456792,
    0.7234076904040407,
    0.19939753397685558,
    -0.039134249302313844,
    0.02951949092570626,
    0.027333068344998768,
];

pub(crate) const SYM6: [f64; 12] = [
    -0.00780070832503238,
    0.0017677118642540077,
    0.04472490177078139,
    -0.02106029251237085,
    -0.07263752278637658,
    0.3379294217281658,
    0.787641141028651,
    0.49105594192797375,
    -0.04831174258569806,
    -0.11799011114852002,
    0.0034907120842221626,
    0.015404109327044824,
];

pub(crate) const SYM7: [f64; 14] = [
    0.002681814568260147,
    -0.001047384888679738,
    -0.012636303403240567,
    0.030515513165877885,
    0.06789269350122057,
    -0.04955283493704283,
    0.017441255086835708,
    0.5361019170905692,
    0.7677643170048829,
    0.2886296317506479,
    -0.14004724044293365,
    -0.10780823770328972,
    0.0040102448715223955,
    0.010268176708464817,
];

pub(crate) const SYM8: [f64; 16] = [
    0.002273363291843112,
    0.0021948620922243667,
    -0.007815655221774563,
    0.017824408138294088,
    0.07751841927970034,
    0.03022005499843186,
    0.031642421046609505,
    0.4283615917939548,
    0.7653633377820792,
    0.3942752520859951,
    -0.1608468807546481,
    -0.19933749673914436,
    -0.0037430812221492743,
    0.03638006508224975,
    0.0027148569848873347,
    -0.0028119562654580796,
];

pub(crate) const SYM9: [f64; 18] = [
    0.001069490032908612,
    -0.00047315449868004354,
    -0.010264064027633121,
    0.008859267493400267,
    0.062077789302885746,
    -0.018233770779395506,
    -0.19155083129728434,
    0.03527248803527104,
    0.6173384491409342,
    0.7178970827644124,
    0.23876091460730517,
    -0.05456895843083335,
    0.0005834627461249819,
    0.030224878858275187,
    -0.011528210207679187,
    -0.013271967781817134,
    0.0006197808889855071,
    0.0014009155259146562,
];

pub(crate) const SYM10: [f64; 20] = [
    -0.0005656037214965191,
    -0.0005452893456246697,
    0.003625582924785977,
    9.418960979851445e-05,
    -0.014523370186513243,
    0.01957202886296458,
    0.08287833162992385,
    0.03865688251686771,
    0.06570054435831948,
    0.4565282791786035,
    0.7479102922295816,
    0.36158735345352894,
    -0.19018914666822165,
    -0.21987021525492687,
    0.008255257113132814,
    0.05914918829699318,
    0.004617880036739375,
    -0.00869108650575602,
    -0.0006029865297042038,
    0.0006254503740986706,
];

pub(crate) const SYM11: [f64; 22] = [
    0.0002071621228932974,
    0.00018957317971910522,
    -0.0011217768447657386,
    0.0018078689844752355,
    0.009814856365700822,
    -0.000949591083193166,
    -0.006636619875146714,
    0.06504613388676783,
    0.1152806507014671,
    0.04483954065231791,
    0.1666697533518061,
    0.595306750889289,
    0.6770669155555602,
    0.13615754986097886,
    -0.2910902057102116,
    -0.18012747681405805,
    0.03654244421781058,
    0.05130846969228325,
    0.0007447303240478037,
    -0.0068776011079549025,
    -0.00037112902261431563,
    0.0004055630459225126,
];

pub(crate) const SYM12: [f64; 24] = [
    0.00013867599651317232,
    0.0001222164540338479,
    -0.0012979148180741655,
    -0.0007470910684367451,
    0.005202313456050735,
    -0.0025826097012526263,
    -0.021294270029633217,
    0.01833934754343851,
    0.08244681001356292,
    0.04193037332160096,
    0.08951070089250326,
    0.4759248219047167,
    0.7344933080606495,
    0.3385504202427877,
    -0.20699299186364087,
    -0.22852720214155703,
    0.02158883564749167,
    0.07853641952244471,
    0.004688447213732105,
    -0.01647188592150755,
    -0.0015045518684139675,
    0.002176549643961514,
    0.00012741848580638827,
    -0.00014457861368246468,
];

pub(crate) const SYM13: [f64; 26] = [
    7.042986690696273e-05,
    3.690537342323894e-05,
    -0.0007213643851363755,
    0.0004132611988416782,
    0.005674853760123338,
    -0.0014924472742587286,
    -0.020749686325520652,
    0.017618296880645045,
    0.09292603089914397,
    0.008819757670429852,
    -0.14049009311367552,
    0.11023022302128688,
    0.6445643839011571,
    0.6957391505615691,
    0.19770481877126597,
    -0.12436246075150338,
    -0.059750627717956466,
    0.01386249743583841,
    -0.017211642726304387,
    -0.020216768133395468,
    0.005296359738721862,
    0.00752622538996817,
    -0.00017094285852957213,
    -0.001136063438927969,
    -3.573862364871594e-05,
    6.820325263074355e-05,
];

pub(crate) const SYM14: [f64; 28] = [
    -3.202356730230122e-05,
    -1.4212549892427827e-05,
    0.0004381049605544914,
    0.00030048189485800796,
    -0.002129939894897562,
    -0.0006323382188538939,
    0.006512093331535293,
    -0.007103086480050534,
    -0.032115372508572756,
    0.007224247515600319,
    0.0654503882350494,
    0.022999710925732053,
    0.08689905245855387,
    0.48102714500716015,
    0.7346624586297267,
    0.3475617052737819,
    -0.19114331262645828,
    -0.21761130902083792,
    0.03656237765616977,
    0.0932623963357398,
    0.0035392592182446293,
    -0.024001682314346233,
    -0.0018842678688421597,
    0.004608711612862789,
    0.00036396615552128326,
    -0.0005510465694103853,
    -1.6002992734879612e-05,
    3.6057774203958325e-05,
];

pub(crate) const SYM15: [f64; 30] = [
    1.631168261779629e-05,
    3.409434485544061e-05,
    -8.275547880609342e-05,
    7.050748497353686e-05,
    0.0011656050361450252,
    0.0006715591560460421,
    -0.0014188909116943616,
    0.007084055782546005,
    0.02071725970360751,
    0.010478388292014872,
    0.019848610329167404,
    0.11592413934966195,
    0.18420582729472876,
    0.1492224989339128,
    0.27434625426916254,
    0.5876657441838612,
    0.5247148891656297,
    -0.05236031880409957,
    -0.41383322247951215,
    -0.1921187537848765,
    0.10553252025851917,
    0.10311135579143813,
    -0.006297935668815056,
    -0.026329808295440304,
    -0.0022915338108081126,
    0.004006672693098512,
    0.0005195114746726813,
    -0.0003704193072751895,
    -3.5669678067317145e-05,
    1.7065365830609316e-05,
];

pub(crate) const SYM16: [f64; 32] = [
    7.681055321580372e-06,
    2.1884746082762307e-06,
    -0.00012571947066341882,
    -6.867177495769291e-05,
    0.0008278878337619905,
    0.0004739582164680316,
    -0.002829015110854247,
    0.00027894521822966297,
    0.009068176115021837,
    -0.008896898240355958,
    -0.037832884428177754,
    0.0018288836548515813,
    0.05593153234187481,
    0.014878476138344018,
    0.09354335053640268,
    0.48961122195009915,
    0.7302317048616664,
    0.3430049861902869,
    -0.18908481775394087,
    -0.21335773210182848,
    0.04794252996031356,
    0.10496536620780125,
    0.0011683676555562733,
    -0.0320553214132558,
    -0.002317790908133712,
    0.00759862665051159,
    0.0006523872206013787,
    -0.0012946563598614225,
    -7.910406860844333e-05,
    0.0001461664821495393,
    2.4953464053690486e-06,
    -8.758106543097312e-06,
];

pub(crate) const SYM17: [f64; 34] = [
    4.297343327338256e-06,
    2.780126693825943e-06,
    -6.293702597545909e-05,
    -1.3506383399799107e-05,
    0.00047599638026318304,
    -0.00013864230268101327,
    -0.0027416759756781813,
    0.0008567700701928022,
    0.010482366933016147,
    -0.004819212803181354,
    -0.03329138349230622,
    0.01790395221438949,
    0.10475461484219489,
    0.01727117821060019,
    -0.11856693261099856,
    0.1423983504151139,
    0.6507166292043823,
    0.681488995344317,
    0.18053958458074407,
    -0.1550760053497069,
    -0.08607087472063264,
    0.01615880872591857,
    -0.007261634750933915,
    -0.01803889724190139,
    0.009952982523507613,
    0.012396988366634302,
    -0.0019054076898564055,
    -0.003932325279794941,
    5.840042869518092e-05,
    0.0007198270642145453,
    2.5207933140671322e-05,
    -7.607124405602918e-05,
    -2.4527163425740825e-06,
    3.7912531943316247e-06,
];

pub(crate) const SYM18: [f64; 36] = [
    -1.7960778892009295e-06,
    3.085438041221169e-08,
    3.506927939133519e-05,
    1.1863054184436751e-05,
    -0.00028762737960776947,
    -0.00015492091922307433,
    0.0012599768577870659,
    0.0005175250085115909,
    -0.003585028282153341,
    0.001540121424240368,
    0.01196014205744783,
    -0.010356853554216104,
    -0.043953128120009025,
    -0.007144669870023436,
    0.03903259218530594,
    -0.004296731730016508,
    0.08671455561750734,
    0.49071958592768505,
    0.7314741945581179,
    0.3525832498971235,
    -0.17289819768795747,
    -0.20085018879645097,
    0.059677618247548886,
    0.11435718611783088,
    -0.0010033066818698714,
    -0.038818968974213976,
    -0.0021160206076615076,
    0.010982469620738806,
    0.0009431492347032198,
    -0.002316829244048431,
    -0.00016006078296633267,
    0.000370439996326925,
    1.4610957312242925e-05,
    -3.872869046309972e-05,
    3.781154033792346e-08,
    2.2010641811719756e-06,
];

pub(crate) const SYM19: [f64; 38] = [
    8.643658787207541e-07,
    8.981501247803168e-07,
    -1.3307650352511978e-05,
    -1.0807103055081238e-05,
    9.528631048049789e-05,
    3.083061279272073e-05,
    -0.000479029422875412,
    9.659990714562381e-05,
    0.0018720090738133697,
    -0.0011593648853256758,
    -0.006151414450885529,
    0.003557837174211705,
    0.01175920185522628,
    -0.014312208465434377,
    -0.01360067886606247,
    0.07917020409383863,
    0.14327565077324067,
    0.12787590708296306,
    0.2868875595231775,
    0.6096728459588316,
    0.5512845433385457,
    -0.008788553312120601,
    -0.3734335112430162,
    -0.16710044635147758,
    0.12759408032059372,
    0.11052093346442597,
    -0.02357016785683382,
    -0.041489324702621275,
    0.0011218842880269678,
    0.010848014829704797,
    0.0006204372590394858,
    -0.002065047179993192,
    -0.00017773634733993476,
    0.00028251648531523154,
    2.226500936544849e-05,
    -2.516621698954578e-05,
    -1.1550934750086996e-06,
    1.1116442106765988e-06,
];

pub(crate) const SYM20: [f64; 40] = [
    4.310397320467014e-07,
    -6.175072554928898e-08,
    -9.412755773586167e-06,
    -1.6177044904027264e-06,
    9.099174824039057e-05,
    3.783757907306904e-05,
    -0.0004963708681217041,
    -0.00024965883044338413,
    0.0016857341686222294,
    0.00037035383864822657,
    -0.004470347054131846,
    0.0028904868473139406,
    0.015181041768772522,
    -0.010143628863005044,
    -0.04657970970720687,
    -0.011728553223259995,
    0.02819138848340658,
    -0.015481485637997389,
    0.08655817546318052,
    0.49443260616690643,
    0.7297790494914685,
    0.3535628619119698,
    -0.16595243876191523,
    -0.1936645725408511,
    0.06830181231034417,
    0.12126611641726277,
    -0.004170920394926029,
    -0.04570326769621625,
    -0.0019383621453848067,
    0.01453516383427353,
    0.001185918693849141,
    -0.0036398190670696253,
    -0.00028708274040445875,
    0.0007201151200294881,
    3.9197803780586175e-05,
    -0.00010599836237124354,
    -2.2376197624195556e-06,
    1.0445778070699693e-05,
    -7.773722220793011e-08,
    -5.426305704507937e-07,
];

pub(crate) const COIF1: [f64; 6] = [
    -0.015655728135775156,
    -0.07273261951254328,
    0.38486484686432104,
    0.8525720202116341,
    0.3378976624580016,
    -0.07273261951254328,
];

pub(crate) const COIF2: [f64; 12] = [
    -0.0007205494455212244,
    -0.0018232088707623188,
    0.005611434819219786,
    0.023680171945979215,
    -0.059434418648325764,
    -0.07648859907921944,
    0.41700518442270135,
    0.8127236354501027,
    0.38611006682199345,
    -0.0673725547227883,
    -0.04146493678352008,
    0.016387336463235636,
];

pub(crate) const COIF3: [f64; 18] = [
    -3.4599773199835076e-05,
    -7.098330251814788e-05,
    0.0004662169598442623,
    0.0011175187709285643,
    -0.002574517688216483,
    -0.00900797613701566,
    0.015880544863272266,
    0.034555027573378874,
    -0.0823019271070132,
    -0.0717998216191007,
    0.42848347637741774,
    0.7937772226258257,
    0.40517690240940657,
    -0.061123390002475506,
    -0.06577191128195763,
    0.023452696142201128,
    0.007782596426993869,
    -0.003793512864676738,
];

pub(crate) const COIF4: [f64; 24] = [
    -1.7849928336938115e-06,
    -3.2596512340114585e-06,
    3.1229882076560314e-05,
    6.233889586339943e-05,
    -0.0002599744384248686,
    -0.0005890204979681136,
    0.0012665614093872598,
    0.0037514363611022505,
    -0.005658286596759924,
    -0.01521173159733966,
    0.025082261885460318,
    0.03933442707952766,
    -0.09622044198560054,
    -0.06662747431037401,
    0.4343860565388124,
    0.7822389308738287,
    0.41530840707656075,
    -0.056077313365931476,
    -0.08126669962696353,
    0.02668230012462503,
    0.016068943993584828,
    -0.0073461664303391405,
    -0.0016294919587520231,
    0.0008923137047869301,
];

pub(crate) const COIF5: [f64; 30] = [
    -9.635471769523904e-08,
    -1.6289599099044308e-07,
    2.0654941598168727e-06,
    3.7084992476417055e-06,
    -2.1297875751081797e-05,
    -4.127776783330735e-05,
    0.00014046946939521386,
    0.00030215160900843994,
    -0.0006378826740884877,
    -0.0016629718650163253,
    0.0024333312921673133,
    0.006764215874055373,
    -0.009164244937054304,
    -0.019761763417517224,
    0.03268355555498454,
    0.04128922710021394,
    -0.1055742264258757,
    -0.06203594614534326,
    0.43799160831741424,
    0.7742896217247125,
    0.4215661886054273,
    -0.05204314574293781,
    -0.09192002722176337,
    0.028168049485935664,
    0.023408134664648937,
    -0.010131110191112246,
    -0.004159367385235497,
    0.0021782832941760573,
    0.0003585706628362868,
    -0.00021209837505093763,
];

pub(crate) const BIOR1_1_DEC: [f64; 2] = [
    0.7071067811865476,
    0.7071067811865476,
];

pub(crate) const BIOR1_1_REC: [f64; 2] = [
    0.7071067811865476,
    0.7071067811865476,
];

pub(crate) const BIOR1_3_DEC: [f64; 6] = [
    -0.08838834764831845,
    0.08838834764831845,
    0.7071067811865476,
    0.7071067811865476,
    0.08838834764831845,
    -0.08838834764831845,
];

pub(crate) const BIOR1_3_REC: [f64; 6] = [
    0.0,
    0.0,
    0.7071067811865476,
    0.7071067811865476,
    0.0,
    0.0,
];

pub(crate) const BIOR1_5_DEC: [f64; 10] = [
    0.01657281518405971,
    -0.01657281518405971,
    -0.12153397801643787,
    0.12153397801643787,
    0.7071067811865476,
    0.7071067811865476,
    0.12153397801643787,
    -0.12153397801643787,
    -0.01657281518405971,
    0.01657281518405971,
];

pub(crate) const BIOR1_5_REC: [f64; 10] = [
    0.0,
    0.0,
    0.0,
    0.0,
    0.7071067811865476,
    0.7071067811865476,
    0.0,
    0.0,
    0.0,
    0.0,
];

pub(crate) const BIOR2_2_DEC: [f64; 6] = [
    -0.1767766952966369,
    0.3535533905932738,
    1.0606601717798214,
    0.3535533905932738,
    -0.1767766952966369,
    0.0,
];

pub(crate) const BIOR2_2_REC: [f64; 6] = [
    0.0,
    0.3535533905932738,
    0.7071067811865476,
    0.3535533905932738,
    0.0,
    0.0,
];

pub(crate) const BIOR2_4_DEC: [f64; 10] = [
    0.03314563036811942,
    -0.06629126073623884,
    -0.1767766952966369,
    0.4198446513295126,
    0.9943689110435825,
    0.4198446513295126,
    -0.1767766952966369,
    -0.06629126073623884,
    0.03314563036811942,
    0.0,
];

pub(crate) const BIOR2_4_REC: [f64; 10] = [
    0.0,
    0.0,
    0.0,
    0.3535533905932738,
    0.7071067811865476,
    0.3535533905932738,
    0.0,
    0.0,
    0.0,
    0.0,
];

pub(crate) const BIOR2_6_DEC: [f64; 14] = [
    -0.006905339660024878,
    0.013810679320049757,
    0.046956309688169176,
    -0.10772329869638811,
    -0.16987135563661201,
    0.4474660099696121,
    0.966747552403483,
    0.4474660099696121,
    -0.16987135563661201,
    -0.10772329869638811,
    0.046956309688169176,
    0.013810679320049757,
    -0.006905339660024878,
    0.0,
];

pub(crate) const BIOR2_6_REC: [f64; 14] = [
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
    0.3535533905932738,
    0.7071067811865476,
    0.3535533905932738,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
];

pub(crate) const BIOR2_8_DEC: [f64; 18] = [
    0.0015105430506304422,
    -0.0030210861012608843,
    -0.012947511862546647,
    0.02891610982635418,
    0.052998481890690945,
    -0.13491307360773608,
    -0.16382918343409025,
    0.4625714404759166,
    0.9516421218971786,
    0.4625714404759166,
    -0.16382918343409025,
    -0.13491307360773608,
    0.052998481890690945,
    0.02891610982635418,
    -0.012947511862546647,
    -0.0030210861012608843,
    0.0015105430506304422,
    0.0,
];

pub(crate) const BIOR2_8_REC: [f64; 18] = [
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
    0.3535533905932738,
    0.7071067811865476,
    0.3535533905932738,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
];

pub(crate) const BIOR3_1_DEC: [f64; 4] = [
    -0.3535533905932738,
    1.0606601717798214,
    1.0606601717798214,
    -0.3535533905932738,
];

pub(crate) const BIOR3_1_REC: [f64; 4] = [
    0.1767766952966369,
    0.5303300858899107,
    0.5303300858899107,
    0.1767766952966369,
];

pub(crate) const BIOR3_3_DEC: [f64; 8] = [
    0.06629126073623884,
    -0.19887378220871652,
    -0.15467960838455727,
    0.9943689110435825,
    0.9943689110435825,
    -0.15467960838455727,
    -0.19887378220871652,
    0.06629126073623884,
];

pub(crate) const BIOR3_3_REC: [f64; 8] = [
    0.0,
    0.0,
    0.1767766952966369,
    0.5303300858899107,
    0.5303300858899107,
    0.1767766952966369,
    0.0,
    0.0,
];

pub(crate) const BIOR3_5_DEC: [f64; 12] = [
    -0.013810679320049757,
    0.04143203796014927,
    0.052480581416189075,
    -0.26792717880896527,
    -0.07181553246425874,
    0.966747552403483,
    0.966747552403483,
    -0.07181553246425874,
    -0.26792717880896527,
    0.052480581416189075,
    0.04143203796014927,
    -0.013810679320049757,
];

pub(crate) const BIOR3_5_REC: [f64; 12] = [
    0.0,
    0.0,
    0.0,
    0.0,
    0.1767766952966369,
    0.5303300858899107,
    0.5303300858899107,
    0.1767766952966369,
    0.0,
    0.0,
    0.0,
    0.0,
];

pub(crate) const BIOR3_7_DEC: [f64; 16] = [
    0.0030210861012608843,
    -0.009063258303782653,
    -0.01683176542131064,
    0.074663985074019,
    0.03133297870736289,
    -0.301159125922835,
    -0.026499240945345472,
    0.9516421218971786,
    0.9516421218971786,
    -0.026499240945345472,
    -0.301159125922835,
    0.03133297870736289,
    0.074663985074019,
    -0.01683176542131064,
    -0.009063258303782653,
    0.0030210861012608843,
];

pub(crate) const BIOR3_7_REC: [f64; 16] = [
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
    0.1767766952966369,
    0.5303300858899107,
    0.5303300858899107,
    0.1767766952966369,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
];

pub(crate) const BIOR3_9_DEC: [f64; 20] = [
    -0.000679744372783699,
    0.002039233118351097,
    0.005060319219611981,
    -0.020618912641105536,
    -0.014112787930175846,
    0.09913478249423216,
    0.012300136269419315,
    -0.32019196836077857,
    0.0020500227115698858,
    0.9421257006782068,
    0.9421257006782068,
    0.0020500227115698858,
    -0.32019196836077857,
    0.012300136269419315,
    0.09913478249423216,
    -0.014112787930175846,
    -0.020618912641105536,
    0.005060319219611981,
    0.002039233118351097,
    -0.000679744372783699,
];

pub(crate) const BIOR3_9_REC: [f64; 20] = [
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
    0.1767766952966369,
    0.5303300858899107,
    0.5303300858899107,
    0.1767766952966369,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
    0.0,
];
